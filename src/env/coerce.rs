//! Conversion of candidate strings into typed values.

/// A type a getter can produce from an environment value.
///
/// `from_env_str` returns `None` when the string does not parse; callers
/// substitute their default.
pub trait FromEnvStr: Sized {
    /// Name used in diagnostics, e.g. `"int32"`.
    const TYPE_NAME: &'static str;

    fn from_env_str(s: &str) -> Option<Self>;
}

impl FromEnvStr for String {
    const TYPE_NAME: &'static str = "string";

    fn from_env_str(s: &str) -> Option<Self> {
        Some(s.to_owned())
    }
}

macro_rules! impl_from_str {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FromEnvStr for $ty {
                const TYPE_NAME: &'static str = $name;

                fn from_env_str(s: &str) -> Option<Self> {
                    s.parse().ok()
                }
            }
        )*
    };
}

impl_from_str! {
    i32 => "int32",
    i64 => "int64",
    isize => "int",
}

macro_rules! impl_float {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FromEnvStr for $ty {
                const TYPE_NAME: &'static str = $name;

                fn from_env_str(s: &str) -> Option<Self> {
                    let value: $ty = s.parse().ok()?;
                    if value.is_infinite() && !spells_infinity(s) {
                        return None;
                    }
                    Some(value)
                }
            }
        )*
    };
}

impl_float! {
    f32 => "float32",
    f64 => "float64",
}

/// Out-of-range literals parse to infinity; only an explicit `inf` or
/// `infinity` (any case, optional sign) may produce one.
fn spells_infinity(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl FromEnvStr for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_env_str(s: &str) -> Option<Self> {
        parse_bool(s)
    }
}

/// Parses the accepted boolean spellings.
///
/// True: `1`, `t`, `T`, `TRUE`, `true`, `True`.
/// False: `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
