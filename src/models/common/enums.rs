//! 字符串枚举宏
//!
//! 数据库中以字符串存储、JSON 中以小写字符串传输的枚举统一由此宏生成。
//! 生成的 `VALUES` 同时供校验规则做枚举成员检查。

#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize, ts_rs::TS,
        )]
        $(#[$meta])*
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(format!(
                        "Invalid {}: '{}'. Supported: {}",
                        stringify!($name),
                        s,
                        Self::VALUES.join(", ")
                    )),
                }
            }
        }
    };
}

crate::string_enum! {
    #[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
    ActiveStatus {
        Active => "active",
        Inactive => "inactive",
    }
}

crate::string_enum! {
    #[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
    Gender {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

impl Default for ActiveStatus {
    fn default() -> Self {
        ActiveStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_str() {
        for value in Gender::VALUES {
            let parsed: Gender = value.parse().unwrap();
            assert_eq!(parsed.as_str(), *value);
        }
    }

    #[test]
    fn test_invalid_value_lists_supported() {
        let err = "unknown".parse::<ActiveStatus>().unwrap_err();
        assert!(err.contains("active, inactive"));
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&ActiveStatus::Inactive).unwrap(),
            "\"inactive\""
        );
        let gender: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(gender, Gender::Female);
    }
}
