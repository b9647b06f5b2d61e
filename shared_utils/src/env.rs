use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
///
/// A variable that is set but empty (or only whitespace) counts as missing,
/// which matches how credentials are usually blanked out in `.env` files.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    get_optional_env_var(name).ok_or_else(|| MissingEnvVarError(name.to_string()))
}

/// Reads an environment variable, treating unset and blank values alike.
pub fn get_optional_env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Reads every variable in `names`, failing on the first missing one.
pub fn get_env_vars<const N: usize>(names: [&str; N]) -> Result<[String; N], MissingEnvVarError> {
    let mut values: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, name) in values.iter_mut().zip(names) {
        *slot = get_env_var(name)?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSET: &str = "SHARED_UTILS_TEST_DEFINITELY_UNSET_VAR";

    #[test]
    fn missing_var_reports_its_name() {
        let err = get_env_var(UNSET).unwrap_err();
        assert_eq!(err, MissingEnvVarError(UNSET.to_string()));
        assert_eq!(err.to_string(), format!("Missing environment variable: {UNSET}"));
    }

    #[test]
    fn optional_var_is_none_when_unset() {
        assert!(get_optional_env_var(UNSET).is_none());
    }

    #[test]
    fn first_missing_var_wins() {
        let err = get_env_vars(["PATH", UNSET]).unwrap_err();
        assert_eq!(err.0, UNSET);
    }
}
