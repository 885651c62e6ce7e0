//! Localized weekday and month names
//!
//! Names are plain data supplied by the application: the formatter and the
//! parser index into a [`NameTable`] and never assume a language.
//! [`LocaleRegistry`] keeps one table per locale and can be filled from JSON
//! configuration.

use crate::error::{NameTableError, NameTableResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

const DAYS: usize = 7;
const MONTHS: usize = 12;

/// The four ordered name lists used for `%a %A %b %B`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NameTableDef", rename_all = "camelCase")]
pub struct NameTable {
    day_names: Vec<String>,
    abbreviated_day_names: Vec<String>,
    month_names: Vec<String>,
    abbreviated_month_names: Vec<String>,
}

/// Unvalidated wire form of [`NameTable`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct NameTableDef {
    day_names: Vec<String>,
    abbreviated_day_names: Vec<String>,
    month_names: Vec<String>,
    abbreviated_month_names: Vec<String>,
}

impl TryFrom<NameTableDef> for NameTable {
    type Error = NameTableError;

    fn try_from(def: NameTableDef) -> Result<Self, Self::Error> {
        NameTable::new(
            def.day_names,
            def.abbreviated_day_names,
            def.month_names,
            def.abbreviated_month_names,
        )
    }
}

fn check_len(table: &'static str, names: &[String], expected: usize) -> NameTableResult<()> {
    if names.len() == expected {
        Ok(())
    } else {
        Err(NameTableError::WrongLength {
            table,
            expected,
            found: names.len(),
        })
    }
}

fn words(list: &str) -> Vec<String> {
    list.split_whitespace().map(str::to_string).collect()
}

impl NameTable {
    /// Build a table, checking that each list has 7 or 12 entries.
    ///
    /// Weekday lists start on Sunday, month lists on January.
    pub fn new(
        day_names: Vec<String>,
        abbreviated_day_names: Vec<String>,
        month_names: Vec<String>,
        abbreviated_month_names: Vec<String>,
    ) -> NameTableResult<Self> {
        check_len("dayNames", &day_names, DAYS)?;
        check_len("abbreviatedDayNames", &abbreviated_day_names, DAYS)?;
        check_len("monthNames", &month_names, MONTHS)?;
        check_len("abbreviatedMonthNames", &abbreviated_month_names, MONTHS)?;
        Ok(NameTable {
            day_names,
            abbreviated_day_names,
            month_names,
            abbreviated_month_names,
        })
    }

    /// Build a table from four whitespace-separated word lists
    pub fn from_words(
        day_names: &str,
        abbreviated_day_names: &str,
        month_names: &str,
        abbreviated_month_names: &str,
    ) -> NameTableResult<Self> {
        NameTable::new(
            words(day_names),
            words(abbreviated_day_names),
            words(month_names),
            words(abbreviated_month_names),
        )
    }

    /// Read a single table from JSON
    pub fn from_json(json: &str) -> NameTableResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// English names
    pub fn english() -> Self {
        NameTable {
            day_names: words("Sunday Monday Tuesday Wednesday Thursday Friday Saturday"),
            abbreviated_day_names: words("Sun Mon Tue Wed Thu Fri Sat"),
            month_names: words(
                "January February March April May June July August September October November December",
            ),
            abbreviated_month_names: words("Jan Feb Mar Apr May Jun Jul Aug Sep Oct Nov Dec"),
        }
    }

    /// French names
    pub fn french() -> Self {
        NameTable {
            day_names: words("dimanche lundi mardi mercredi jeudi vendredi samedi"),
            abbreviated_day_names: words("dim. lun. mar. mer. jeu. ven. sam."),
            month_names: words(
                "janvier février mars avril mai juin juillet août septembre octobre novembre décembre",
            ),
            abbreviated_month_names: words(
                "janv. févr. mars avr. mai juin juil. août sept. oct. nov. déc.",
            ),
        }
    }

    /// Full weekday names, Sunday first
    pub fn day_names(&self) -> &[String] {
        &self.day_names
    }

    /// Abbreviated weekday names, Sunday first
    pub fn abbreviated_day_names(&self) -> &[String] {
        &self.abbreviated_day_names
    }

    /// Full month names, January first
    pub fn month_names(&self) -> &[String] {
        &self.month_names
    }

    /// Abbreviated month names, January first
    pub fn abbreviated_month_names(&self) -> &[String] {
        &self.abbreviated_month_names
    }

    /// Full name of a weekday (0 = Sunday); wraps modulo 7
    pub fn day_name(&self, day_of_week: u32) -> &str {
        &self.day_names[day_of_week as usize % DAYS]
    }

    /// Abbreviated name of a weekday (0 = Sunday); wraps modulo 7
    pub fn abbreviated_day_name(&self, day_of_week: u32) -> &str {
        &self.abbreviated_day_names[day_of_week as usize % DAYS]
    }

    /// Full name of a month (1 = January); wraps modulo 12
    pub fn month_name(&self, month: u32) -> &str {
        &self.month_names[(month as usize + MONTHS - 1) % MONTHS]
    }

    /// Abbreviated name of a month (1 = January); wraps modulo 12
    pub fn abbreviated_month_name(&self, month: u32) -> &str {
        &self.abbreviated_month_names[(month as usize + MONTHS - 1) % MONTHS]
    }
}

impl Default for NameTable {
    fn default() -> Self {
        NameTable::english()
    }
}

/// Name tables keyed by locale.
///
/// Filled once at startup and read afterwards; it is an ordinary value that
/// callers pass around, not process-wide state.
///
/// # Examples
///
/// ```
/// use datetime::LocaleRegistry;
///
/// let registry = LocaleRegistry::with_builtin();
/// let french = registry.get("French").unwrap();
/// assert_eq!(french.month_name(8), "août");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    tables: BTreeMap<String, NameTable>,
}

impl LocaleRegistry {
    /// An empty registry
    pub fn new() -> Self {
        LocaleRegistry::default()
    }

    /// A registry holding the built-in `English` and `French` tables
    pub fn with_builtin() -> Self {
        let mut registry = LocaleRegistry::new();
        registry.register("English", NameTable::english());
        registry.register("French", NameTable::french());
        registry
    }

    /// Add or replace the table for `locale`, returning the previous one
    pub fn register(&mut self, locale: impl Into<String>, table: NameTable) -> Option<NameTable> {
        let locale = locale.into();
        debug!(locale = %locale, "registering name table");
        self.tables.insert(locale, table)
    }

    /// The table for `locale`
    pub fn get(&self, locale: &str) -> NameTableResult<&NameTable> {
        self.tables
            .get(locale)
            .ok_or_else(|| NameTableError::UnknownLocale(locale.to_string()))
    }

    /// Registered locale names, sorted
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Number of registered locales
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no locale is registered
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Register every table of a `{"locale": {...}, ...}` JSON document.
    ///
    /// Nothing is registered unless the whole document is valid. Returns the
    /// number of tables loaded.
    pub fn load_json(&mut self, json: &str) -> NameTableResult<usize> {
        let tables: BTreeMap<String, NameTable> = serde_json::from_str(json)?;
        let count = tables.len();
        for (locale, table) in tables {
            self.register(locale, table);
        }
        debug!(count, "loaded name tables");
        Ok(count)
    }

    /// Like [`load_json`](Self::load_json), reading the document from a file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> NameTableResult<usize> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading name table configuration");
        let json = std::fs::read_to_string(path)?;
        self.load_json(&json)
    }
}
