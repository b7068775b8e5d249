//! The semantic model of a JOVIAL translation unit (MIL-STD-1589B/C, "J73").
//!
//! A [`SemanticModel`] is produced once per parse and is never mutated
//! afterwards — see [`crate::parser`] for the recogniser that builds it.

use indexmap::IndexMap;

/// J73 scalar type tag. `Entry` marks a name that was declared as a table
/// entry but is also reachable at top level; `Unknown` covers `DEF`/`REF`
/// stubs whose kind wasn't specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JovialType {
    Signed,
    Unsigned,
    Float,
    Fixed,
    Bit,
    Character,
    Pointer,
    Status,
    Table,
    Entry,
    Unknown,
}

impl JovialType {
    /// Map a one-or-few-letter type abbreviation (case-insensitive) to its tag.
    pub fn from_abbrev(abbrev: &str) -> Option<JovialType> {
        match abbrev.to_ascii_uppercase().as_str() {
            "S" => Some(JovialType::Signed),
            "U" => Some(JovialType::Unsigned),
            "F" => Some(JovialType::Float),
            "A" => Some(JovialType::Fixed),
            "B" => Some(JovialType::Bit),
            "C" => Some(JovialType::Character),
            "P" => Some(JovialType::Pointer),
            "STATUS" => Some(JovialType::Status),
            _ => None,
        }
    }

    /// Short source-level spelling, used in hover text and completion detail.
    pub fn as_str(&self) -> &'static str {
        match self {
            JovialType::Signed => "S",
            JovialType::Unsigned => "U",
            JovialType::Float => "F",
            JovialType::Fixed => "A",
            JovialType::Bit => "B",
            JovialType::Character => "C",
            JovialType::Pointer => "P",
            JovialType::Status => "STATUS",
            JovialType::Table => "TABLE",
            JovialType::Entry => "ENTRY",
            JovialType::Unknown => "UNKNOWN",
        }
    }
}

/// A scalar `ITEM` declaration.
#[derive(Debug, Clone)]
pub struct Item {
    pub name: String,
    pub jovial_type: JovialType,
    /// Bit-width for S/U/B, precision for F, length for C.
    pub size: Option<i64>,
    /// Scale factor, for Fixed (`A`) items.
    pub scale: Option<i64>,
    /// Ordered `V(name)` values, non-empty only for `Status` items that had any.
    pub status_values: Vec<String>,
    pub is_constant: bool,
    pub is_static: bool,
    pub is_parallel: bool,
    pub initial_value: Option<String>,
    pub line: usize,
    pub column_start: usize,
    pub column_end: usize,
    /// Name of the enclosing `TABLE`, if this item was declared in a table body.
    pub parent_table: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, jovial_type: JovialType, line: usize) -> Self {
        Item {
            name: name.into(),
            jovial_type,
            size: None,
            scale: None,
            status_values: Vec::new(),
            is_constant: false,
            is_static: false,
            is_parallel: false,
            initial_value: None,
            line,
            column_start: 0,
            column_end: 0,
            parent_table: None,
        }
    }
}

/// A `TABLE` declaration: a multi-dimensional aggregate whose body (between
/// `BEGIN` and `END`) declares member items.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub name: String,
    /// One `(lower, upper)` pair per dimension.
    pub dimensions: Vec<(i64, i64)>,
    pub entries: IndexMap<String, Item>,
    pub is_constant: bool,
    pub is_static: bool,
    pub is_parallel: bool,
    pub wordsize: Option<i64>,
    pub line_start: usize,
    pub line_end: usize,
}

impl Table {
    pub fn new(name: impl Into<String>, line_start: usize) -> Self {
        Table {
            name: name.into(),
            line_start,
            ..Default::default()
        }
    }

    pub fn dimensions_str(&self) -> String {
        self.dimensions
            .iter()
            .map(|(l, u)| format!("{l}:{u}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A `PROC` declaration.
#[derive(Debug, Clone, Default)]
pub struct Proc {
    pub name: String,
    /// `(param-name, mode)` pairs in declaration order.
    pub parameters: Vec<(String, ParamMode)>,
    pub return_type: Option<JovialType>,
    pub is_recursive: bool,
    pub is_reentrant: bool,
    pub local_items: IndexMap<String, Item>,
    pub local_tables: IndexMap<String, Table>,
    pub line_start: usize,
    pub line_end: usize,
    pub body_start: usize,
}

impl Proc {
    pub fn new(name: impl Into<String>, line_start: usize) -> Self {
        Proc {
            name: name.into(),
            line_start,
            ..Default::default()
        }
    }

    pub fn parameters_str(&self) -> String {
        self.parameters
            .iter()
            .map(|(name, mode)| format!("{name} ({})", mode.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    In,
    Out,
    InOut,
}

impl ParamMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamMode::In => "IN",
            ParamMode::Out => "OUT",
            ParamMode::InOut => "INOUT",
        }
    }
}

/// A `COMPOOL` reference: the set of names a module imports from a shared
/// communication pool.
#[derive(Debug, Clone, Default)]
pub struct CompoolReference {
    pub name: String,
    pub items: indexmap::IndexSet<String>,
    pub tables: indexmap::IndexSet<String>,
    pub procs: indexmap::IndexSet<String>,
    pub line: usize,
}

/// A compile-time textual constant (`DEFINE`).
#[derive(Debug, Clone)]
pub struct Define {
    pub name: String,
    /// The verbatim right-hand-side text, unparsed.
    pub value: String,
    pub line: usize,
}

/// A user `TYPE` declaration: a free-text description, not further parsed.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub name: String,
    pub description: String,
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleType {
    Main,
    Compool,
    Proc,
}

/// Everything recognised from one JOVIAL translation unit.
///
/// Produced in full by a single [`crate::parser::SemanticParser::parse`]
/// call and discarded wholesale on the next edit — see spec §3 Lifecycle.
/// Identifier lookups fold to upper case; the original source casing is
/// preserved in the stored entities (§3 invariant iv).
#[derive(Debug, Clone, Default)]
pub struct SemanticModel {
    pub items: IndexMap<String, Item>,
    pub tables: IndexMap<String, Table>,
    pub procs: IndexMap<String, Proc>,
    pub compools: IndexMap<String, CompoolReference>,
    pub defines: IndexMap<String, Define>,
    pub types: IndexMap<String, TypeDecl>,
    pub program_name: Option<String>,
    pub module_type: Option<ModuleType>,
}

/// Fold an identifier to the model's canonical lookup key.
pub fn fold(name: &str) -> String {
    name.to_ascii_uppercase()
}

impl SemanticModel {
    pub fn new() -> Self {
        SemanticModel::default()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.insert(fold(&item.name), item);
    }

    pub fn get_item(&self, name: &str) -> Option<&Item> {
        self.items.get(&fold(name))
    }

    pub fn add_table(&mut self, table: Table) {
        self.tables.insert(fold(&table.name), table);
    }

    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(&fold(name))
    }

    pub fn get_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(&fold(name))
    }

    pub fn add_proc(&mut self, proc: Proc) {
        self.procs.insert(fold(&proc.name), proc);
    }

    pub fn get_proc(&self, name: &str) -> Option<&Proc> {
        self.procs.get(&fold(name))
    }

    pub fn get_proc_mut(&mut self, name: &str) -> Option<&mut Proc> {
        self.procs.get_mut(&fold(name))
    }

    /// Union of item, table, proc, and define names, de-duplicated
    /// case-insensitively (spec §4.6 `get_all_symbols`).
    pub fn get_all_symbols(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for name in self
            .items
            .values()
            .map(|i| &i.name)
            .chain(self.tables.values().map(|t| &t.name))
            .chain(self.procs.values().map(|p| &p.name))
            .chain(self.defines.values().map(|d| &d.name))
        {
            if seen.insert(fold(name)) {
                out.push(name.clone());
            }
        }
        out
    }
}
