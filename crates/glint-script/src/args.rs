//! Declared argument shapes for the script-callable UI wrappers.

use glam::Vec2;
use mlua::Table;

/// When a window position/size wrapper call takes effect.
///
/// Parsed from the wrapper's optional condition string; anything
/// unrecognized (or no condition at all) means apply every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplyCond {
    /// Apply on every call.
    #[default]
    Always,
    /// Apply only the first time in the run.
    Once,
    /// Apply only if the window has no saved state yet.
    FirstUseEver,
    /// Apply when the window is appearing.
    Appearing,
}

impl ApplyCond {
    /// Parse the optional condition argument.
    #[must_use]
    pub fn parse(condition: Option<&str>) -> Self {
        match condition {
            Some("Once") => Self::Once,
            Some("FirstUseEver") => Self::FirstUseEver,
            Some("Appearing") => Self::Appearing,
            _ => Self::Always,
        }
    }
}

/// Declared schema of a two-component table argument.
///
/// Each component lists its accepted named fields in order; a component not
/// found by name falls back to the positional index (1 or 2). Scripts can
/// therefore pass `{x=10, y=20}`, `{w=400, h=100}` (for sizes), or
/// `{10, 20}` interchangeably.
#[derive(Debug, Clone, Copy)]
pub struct Vec2Schema {
    /// Accepted names for the first component.
    pub first: &'static [&'static str],
    /// Accepted names for the second component.
    pub second: &'static [&'static str],
}

/// Schema for window positions: `x`/`y` or positional.
pub const POS_SCHEMA: Vec2Schema = Vec2Schema {
    first: &["x"],
    second: &["y"],
};

/// Schema for window sizes: `x`/`w` and `y`/`h`, or positional.
pub const SIZE_SCHEMA: Vec2Schema = Vec2Schema {
    first: &["x", "w"],
    second: &["y", "h"],
};

impl Vec2Schema {
    /// Extract both components from a script-supplied table.
    ///
    /// A component present neither by name nor by position is a script
    /// error, surfaced to the calling chunk like any other bad argument.
    pub fn extract(&self, table: &Table) -> mlua::Result<Vec2> {
        let x = Self::component(table, self.first, 1)?;
        let y = Self::component(table, self.second, 2)?;
        Ok(Vec2::new(x, y))
    }

    fn component(table: &Table, names: &[&str], index: i64) -> mlua::Result<f32> {
        for name in names {
            if let Some(value) = table.get::<Option<f32>>(*name)? {
                return Ok(value);
            }
        }
        if let Some(value) = table.get::<Option<f32>>(index)? {
            return Ok(value);
        }
        Err(mlua::Error::RuntimeError(format!(
            "missing table field {} (or positional index {index})",
            names.join("/")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlua::Lua;

    fn table_from(lua: &Lua, chunk: &str) -> Table {
        lua.load(chunk).eval().unwrap()
    }

    #[test]
    fn cond_parsing() {
        assert_eq!(ApplyCond::parse(None), ApplyCond::Always);
        assert_eq!(ApplyCond::parse(Some("Once")), ApplyCond::Once);
        assert_eq!(ApplyCond::parse(Some("FirstUseEver")), ApplyCond::FirstUseEver);
        assert_eq!(ApplyCond::parse(Some("Appearing")), ApplyCond::Appearing);
        assert_eq!(ApplyCond::parse(Some("bogus")), ApplyCond::Always);
    }

    #[test]
    fn named_fields() {
        let lua = Lua::new();
        let table = table_from(&lua, "{ x = 10, y = 20 }");
        assert_eq!(POS_SCHEMA.extract(&table).unwrap(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn size_aliases() {
        let lua = Lua::new();
        let table = table_from(&lua, "{ w = 400, h = 100 }");
        assert_eq!(SIZE_SCHEMA.extract(&table).unwrap(), Vec2::new(400.0, 100.0));

        // Named fields win over positional entries.
        let table = table_from(&lua, "{ 1, 2, x = 400, y = 100 }");
        assert_eq!(SIZE_SCHEMA.extract(&table).unwrap(), Vec2::new(400.0, 100.0));
    }

    #[test]
    fn positional_fallback() {
        let lua = Lua::new();
        let table = table_from(&lua, "{ 10, 20 }");
        assert_eq!(POS_SCHEMA.extract(&table).unwrap(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn missing_component_is_an_error() {
        let lua = Lua::new();
        let table = table_from(&lua, "{ x = 10 }");
        assert!(POS_SCHEMA.extract(&table).is_err());
    }
}
