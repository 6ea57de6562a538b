pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;

pub use error::{FormatError, compute_suggestions};
pub use formatter::format;
pub use types::Value;

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly.
///
/// # Example
///
/// ```
/// use phrase::{Value, context};
///
/// let ctx = context! { "count" => 3, "name" => "Alice" };
/// assert_eq!(ctx.len(), 2);
/// assert_eq!(ctx["count"].as_number(), Some(3));
/// assert_eq!(ctx["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! context {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
