use tracing::warn;

/// A trait to abstract over environment variable access.
///
/// Settings read their defaults from `SHADESCALE_*` environment variables.
/// Going through this trait instead of `std::env` keeps that logic testable:
/// Tests simply substitute a fake environment. Implementations only need to
/// provide [`Environment::read_os`].
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Determine whether the environment variable is set to a truthy value.
    ///
    /// Any non-empty value other than `0`, `false`, `no`, and `off` counts as
    /// true, ignoring ASCII case.
    fn is_enabled(&self, key: &str) -> bool {
        match self.read(key) {
            Ok(value) => {
                let value = value.trim().to_ascii_lowercase();
                !value.is_empty() && !matches!(value.as_str(), "0" | "false" | "no" | "off")
            }
            Err(_) => false,
        }
    }

    /// Parse the environment variable as a setting.
    ///
    /// This method returns `None` if the variable is undefined. It also
    /// returns `None` if the variable's value does not parse, after logging a
    /// warning, so that callers fall back on their defaults.
    fn read_setting<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.read(key).ok()?;
        match value.trim().parse() {
            Ok(setting) => Some(setting),
            Err(error) => {
                warn!(key, %error, "ignoring malformed setting");
                None
            }
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}

#[cfg(test)]
mod test {
    use super::Environment;
    use std::collections::HashMap;

    pub(crate) struct FakeEnv {
        bindings: HashMap<String, String>,
    }

    impl FakeEnv {
        /// Create a new fake environment.
        pub(crate) fn new() -> FakeEnv {
            FakeEnv {
                bindings: HashMap::new(),
            }
        }

        /// Set the fake environment variable.
        pub(crate) fn set(&mut self, key: &str, value: &str) -> &mut Self {
            self.bindings.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl Environment for FakeEnv {
        fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
            self.bindings.get(key).map(Into::into)
        }
    }

    #[test]
    fn test_flags_and_settings() {
        let env = &mut FakeEnv::new();
        assert!(!env.is_enabled("FLAG"));
        env.set("FLAG", "Off");
        assert!(!env.is_enabled("FLAG"));
        env.set("FLAG", "1");
        assert!(env.is_enabled("FLAG"));

        assert_eq!(env.read_setting::<u16>("NUMBER"), None);
        env.set("NUMBER", " 500 ");
        assert_eq!(env.read_setting::<u16>("NUMBER"), Some(500));
        env.set("NUMBER", "lots");
        assert_eq!(env.read_setting::<u16>("NUMBER"), None);
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;
