//! Boolean-like interpretation of condition values

use serde_json::Value;

/// Types that can stand in for a boolean condition.
///
/// Zero numbers, empty strings, the string `"0"`, empty collections, `None`
/// and JSON `null` are falsy; everything else is truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty() && self != "0"
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        self.as_str().is_truthy()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => s.is_truthy(),
            Value::Array(arr) => !arr.is_empty(),
            Value::Object(obj) => !obj.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bool() {
        assert!(true.is_truthy());
        assert!(!false.is_truthy());
    }

    #[test]
    fn test_numbers() {
        assert!(1i32.is_truthy());
        assert!((-3i64).is_truthy());
        assert!(!0u8.is_truthy());
        assert!(0.5f64.is_truthy());
        assert!(!0.0f32.is_truthy());
    }

    #[test]
    fn test_strings() {
        assert!("yes".is_truthy());
        assert!("false".is_truthy());
        assert!(!"".is_truthy());
        assert!(!"0".is_truthy());
        assert!(!String::new().is_truthy());
    }

    #[test]
    fn test_collections() {
        assert!(vec![0i32].is_truthy());
        assert!(!Vec::<i32>::new().is_truthy());
        let empty: &[u8] = &[];
        assert!(!empty.is_truthy());
    }

    #[test]
    fn test_option() {
        assert!(Some(1i32).is_truthy());
        assert!(!Some(0i32).is_truthy());
        assert!(!None::<bool>.is_truthy());
    }

    #[test]
    fn test_json_values() {
        assert!(!json!(null).is_truthy());
        assert!(json!(true).is_truthy());
        assert!(!json!(0).is_truthy());
        assert!(json!(2.5).is_truthy());
        assert!(!json!("0").is_truthy());
        assert!(json!("text").is_truthy());
        assert!(!json!([]).is_truthy());
        assert!(json!([null]).is_truthy());
        assert!(!json!({}).is_truthy());
        assert!(json!({"a": 1}).is_truthy());
    }
}
