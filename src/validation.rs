use serde::Deserialize;
use serde_json::Value;

pub const NAME_ERROR: &str = "Name is required and must be a non-empty string.";
pub const EMAIL_ERROR: &str = "A valid email address is required.";
pub const AGE_ERROR: &str = "Age must be a number between 0 and 120.";

/// Write-endpoint request body. Fields are kept as raw JSON values so that a
/// missing or wrong-typed field surfaces as a field-validation failure rather
/// than a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub age: Option<Value>,
}

/// Validated input for insert/update. `name` and `email` hold the original
/// (untrimmed) strings; normalization for storage happens in the handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Checks a candidate record field by field, first failure wins:
/// name must be a non-empty string after trimming, email must be a string
/// containing `@`, age must be an integer in [0, 120].
pub fn validate_user_input(payload: &UserPayload) -> Result<ValidUser, &'static str> {
    let name = payload
        .name
        .as_ref()
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or(NAME_ERROR)?;

    let email = payload
        .email
        .as_ref()
        .and_then(Value::as_str)
        .filter(|s| s.contains('@'))
        .ok_or(EMAIL_ERROR)?;

    let age = payload
        .age
        .as_ref()
        .and_then(as_integer)
        .filter(|age| (0..=120).contains(age))
        .ok_or(AGE_ERROR)?;

    Ok(ValidUser {
        name: name.to_owned(),
        email: email.to_owned(),
        age,
    })
}

// Accepts JSON numbers without a fractional part (30 and 30.0 alike).
fn as_integer(value: &Value) -> Option<i32> {
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).ok();
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
        .map(|f| f as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(body: Value) -> UserPayload {
        serde_json::from_value(body).expect("payload should deserialize")
    }

    #[test]
    fn accepts_valid_record() {
        let result = validate_user_input(&payload(json!({
            "name": "Ann",
            "email": "ann@example.com",
            "age": 29
        })));

        assert_eq!(
            result,
            Ok(ValidUser {
                name: "Ann".to_owned(),
                email: "ann@example.com".to_owned(),
                age: 29,
            })
        );
    }

    #[test]
    fn keeps_original_strings_untrimmed() {
        let result = validate_user_input(&payload(json!({
            "name": "  Ann  ",
            "email": " ANN@EXAMPLE.COM ",
            "age": 29
        })))
        .unwrap();

        assert_eq!(result.name, "  Ann  ");
        assert_eq!(result.email, " ANN@EXAMPLE.COM ");
    }

    #[test]
    fn rejects_missing_or_empty_name() {
        for body in [
            json!({ "email": "a@b.com", "age": 30 }),
            json!({ "name": "", "email": "a@b.com", "age": 30 }),
            json!({ "name": "   ", "email": "a@b.com", "age": 30 }),
            json!({ "name": 42, "email": "a@b.com", "age": 30 }),
            json!({ "name": null, "email": "a@b.com", "age": 30 }),
        ] {
            assert_eq!(validate_user_input(&payload(body)), Err(NAME_ERROR));
        }
    }

    #[test]
    fn name_error_wins_even_when_other_fields_invalid() {
        let result = validate_user_input(&payload(json!({
            "name": " ",
            "email": "not-an-email",
            "age": 999
        })));

        assert_eq!(result, Err(NAME_ERROR));
    }

    #[test]
    fn rejects_email_without_at_sign() {
        for body in [
            json!({ "name": "Ann", "age": 30 }),
            json!({ "name": "Ann", "email": "ann.example.com", "age": 30 }),
            json!({ "name": "Ann", "email": 7, "age": 30 }),
        ] {
            assert_eq!(validate_user_input(&payload(body)), Err(EMAIL_ERROR));
        }
    }

    #[test]
    fn rejects_bad_ages() {
        for body in [
            json!({ "name": "Ann", "email": "a@b.com" }),
            json!({ "name": "Ann", "email": "a@b.com", "age": -1 }),
            json!({ "name": "Ann", "email": "a@b.com", "age": 121 }),
            json!({ "name": "Ann", "email": "a@b.com", "age": 29.5 }),
            json!({ "name": "Ann", "email": "a@b.com", "age": "29" }),
            json!({ "name": "Ann", "email": "a@b.com", "age": null }),
        ] {
            assert_eq!(validate_user_input(&payload(body)), Err(AGE_ERROR));
        }
    }

    #[test]
    fn accepts_whole_float_age() {
        let result = validate_user_input(&payload(json!({
            "name": "Ann",
            "email": "a@b.com",
            "age": 30.0
        })));

        assert_eq!(result.map(|v| v.age), Ok(30));
    }

    #[test]
    fn accepts_age_boundaries() {
        for age in [0, 120] {
            let result = validate_user_input(&payload(json!({
                "name": "Ann",
                "email": "a@b.com",
                "age": age
            })));
            assert_eq!(result.map(|v| v.age), Ok(age));
        }
    }
}
