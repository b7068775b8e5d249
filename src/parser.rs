//! The line-oriented statement recogniser (spec §4.1–§4.5, §4.7).
//!
//! [`SemanticParser::parse`] is the only public entry point: it consumes
//! source text and returns a freshly-built [`SemanticModel`]. All context
//! (current table/proc, the statement buffer) lives on the parser and is
//! reset at the start of every call — there is no persistent state across
//! documents or across parses of the same document (spec §5, §9).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    CompoolReference, Define, Item, JovialType, ModuleType, ParamMode, Proc, SemanticModel, Table,
    TypeDecl,
};

static STATUS_VALUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)V\s*\(\s*([A-Za-z][A-Za-z0-9']*)\s*\)").unwrap());

static START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^START\s+([A-Za-z][A-Za-z0-9']*)?").unwrap());

static COMPOOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^COMPOOL\s+([A-Za-z][A-Za-z0-9']*)").unwrap());

// Type alternation tries STATUS before the single-letter abbreviations:
// regex alternation is leftmost-first, and "S" would otherwise match the
// first letter of "STATUS" and leave "TATUS ..." dangling in the tail.
static ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^ITEM\s+([A-Za-z][A-Za-z0-9']*)\s+((?:(?:STATIC|CONSTANT|PARALLEL)\s+)*)(STATUS|S|U|F|A|B|C|P)\s*(\d+)?(.*)$",
    )
    .unwrap()
});

static ITEM_INITIAL_VALUE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"=\s*(.+)$").unwrap());

static TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^TABLE\s+([A-Za-z][A-Za-z0-9']*)\s*\(([^)]+)\)\s*(.*)$").unwrap()
});

static TABLE_WORDSIZE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)W\s+(\d+)").unwrap());

static PROC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^PROC\s+([A-Za-z][A-Za-z0-9']*)\s*(?:\(([^)]*)\))?\s*(.*)$").unwrap()
});

static TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^TYPE\s+([A-Za-z][A-Za-z0-9']*)\s+(.+)$").unwrap());

static DEFINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^DEFINE\s+([A-Za-z][A-Za-z0-9']*)\s*=?\s*(.+)$").unwrap());

static DEF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^DEF\s+(ITEM|TABLE|PROC)?\s*([A-Za-z][A-Za-z0-9']*)").unwrap());

static REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^REF\s+(ITEM|TABLE|PROC)?\s*([A-Za-z][A-Za-z0-9']*)").unwrap());

fn strip_semicolon(statement: &str) -> String {
    statement.trim().trim_end_matches(';').trim().to_string()
}

fn parse_int(text: &str) -> i64 {
    let trimmed = text.trim();
    let digits_only = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if !digits_only.is_empty() && digits_only.chars().all(|c| c.is_ascii_digit()) {
        trimmed.parse().unwrap_or(0)
    } else {
        0
    }
}

/// Per-call parsing context. Confined to one [`SemanticParser::parse`]
/// invocation; never promoted to shared/global state (spec §9).
#[derive(Default)]
struct ParserContext {
    current_table: Option<String>,
    in_table_body: bool,
    current_proc: Option<String>,
    in_proc_body: bool,
    in_compool: bool,
    current_compool: Option<String>,
}

/// Consumes JOVIAL source text and produces a [`SemanticModel`]. Stateless
/// across calls: every [`parse`](SemanticParser::parse) installs a fresh
/// model and a fresh [`ParserContext`].
#[derive(Default)]
pub struct SemanticParser {
    model: SemanticModel,
    ctx: ParserContext,
}

impl SemanticParser {
    pub fn new() -> Self {
        SemanticParser::default()
    }

    /// Parse `text` into a complete [`SemanticModel`]. Total and forgiving:
    /// a statement that fails to match any recogniser is silently dropped
    /// (spec §7); this function never panics or returns an error.
    pub fn parse(&mut self, text: &str) -> SemanticModel {
        self.model = SemanticModel::new();
        self.ctx = ParserContext::default();

        let lines: Vec<&str> = text.split('\n').collect();
        let mut buffer = String::new();

        for (i, raw_line) in lines.iter().enumerate() {
            let line = remove_comments(raw_line);
            let stripped = line.trim();
            if stripped.is_empty() {
                continue;
            }

            buffer.push(' ');
            buffer.push_str(stripped);

            let upper_stripped = stripped.to_ascii_uppercase();
            let is_block_marker = matches!(
                upper_stripped.as_str(),
                "BEGIN" | "END" | "START" | "TERM"
            );

            if stripped.ends_with(';') || is_block_marker {
                let statement = buffer.trim().to_string();
                self.dispatch(&statement, i, raw_line);
                buffer.clear();
            }
        }

        std::mem::take(&mut self.model)
    }

    fn dispatch(&mut self, statement: &str, line_num: usize, final_line: &str) {
        let upper = statement.to_ascii_uppercase();

        if upper.starts_with("START") {
            self.handle_start(statement);
        } else if upper.starts_with("TERM") {
            // End of module; no state to record.
        } else if upper.starts_with("COMPOOL") {
            self.handle_compool(statement, line_num);
        } else if upper == "BEGIN" {
            self.handle_begin(line_num);
        } else if upper == "END" {
            self.handle_end(line_num);
        } else if upper.starts_with("ITEM") {
            self.handle_item(statement, line_num, final_line);
        } else if upper.starts_with("TABLE") {
            self.handle_table(statement, line_num);
        } else if upper.starts_with("PROC") {
            self.handle_proc(statement, line_num);
        } else if upper.starts_with("TYPE") {
            self.handle_type(statement, line_num);
        } else if upper.starts_with("DEFINE") {
            self.handle_define(statement, line_num);
        } else if upper.starts_with("DEF") {
            self.handle_def(statement, line_num);
        } else if upper.starts_with("REF") {
            self.handle_ref(statement, line_num);
        }
        // Unrecognised leading words are silently ignored (spec §4.2).
    }

    fn handle_start(&mut self, statement: &str) {
        if let Some(caps) = START_RE.captures(statement) {
            if let Some(name) = caps.get(1) {
                self.model.program_name = Some(name.as_str().to_string());
            }
        }
        self.model.module_type = Some(ModuleType::Main);
    }

    fn handle_compool(&mut self, statement: &str, line_num: usize) {
        if let Some(caps) = COMPOOL_RE.captures(statement) {
            let name = caps.get(1).map(|m| m.as_str().to_string());
            if let Some(name) = name {
                self.model
                    .compools
                    .entry(crate::model::fold(&name))
                    .or_insert_with(|| CompoolReference {
                        name: name.clone(),
                        line: line_num,
                        ..Default::default()
                    });
                self.ctx.current_compool = Some(name.clone());
                self.model.program_name = Some(name);
            }
        }
        self.model.module_type = Some(ModuleType::Compool);
        self.ctx.in_compool = true;
    }

    fn handle_begin(&mut self, line_num: usize) {
        if self.ctx.current_table.is_some() {
            self.ctx.in_table_body = true;
        }
        if let Some(proc_name) = self.ctx.current_proc.clone() {
            self.ctx.in_proc_body = true;
            if let Some(proc) = self.model.get_proc_mut(&proc_name) {
                proc.body_start = line_num;
            }
        }
    }

    fn handle_end(&mut self, line_num: usize) {
        if self.ctx.in_table_body {
            self.ctx.in_table_body = false;
            if let Some(table_name) = self.ctx.current_table.take() {
                if let Some(table) = self.model.get_table_mut(&table_name) {
                    table.line_end = line_num;
                }
            }
        } else if self.ctx.in_proc_body {
            self.ctx.in_proc_body = false;
            if let Some(proc_name) = self.ctx.current_proc.take() {
                if let Some(proc) = self.model.get_proc_mut(&proc_name) {
                    proc.line_end = line_num;
                }
            }
        }
    }

    fn handle_item(&mut self, statement: &str, line_num: usize, final_line: &str) {
        let stmt = strip_semicolon(statement);
        let Some(caps) = ITEM_RE.captures(&stmt) else {
            return;
        };

        let name = caps[1].to_string();
        let attrs = caps.get(2).map(|m| m.as_str()).unwrap_or("").to_ascii_uppercase();
        let type_abbrev = &caps[3];
        let size = caps.get(4).and_then(|m| m.as_str().parse::<i64>().ok());
        let rest = caps.get(5).map(|m| m.as_str()).unwrap_or("");

        let jovial_type = JovialType::from_abbrev(type_abbrev).unwrap_or(JovialType::Unknown);

        let status_values = if jovial_type == JovialType::Status {
            STATUS_VALUE_RE
                .captures_iter(statement)
                .map(|c| c[1].to_string())
                .collect()
        } else {
            Vec::new()
        };

        let initial_value = ITEM_INITIAL_VALUE_RE
            .captures(rest)
            .map(|c| c[1].trim().to_string());

        let (column_start, column_end) = find_name_span(final_line, &name);

        let mut item = Item::new(name.clone(), jovial_type, line_num);
        item.size = size;
        item.status_values = status_values;
        item.is_constant = attrs.contains("CONSTANT");
        item.is_static = attrs.contains("STATIC");
        item.is_parallel = attrs.contains("PARALLEL");
        item.initial_value = initial_value;
        item.column_start = column_start;
        item.column_end = column_end;
        item.parent_table = self.ctx.current_table.clone();

        if self.ctx.in_table_body {
            if let Some(table_name) = self.ctx.current_table.clone() {
                if let Some(table) = self.model.get_table_mut(&table_name) {
                    table.entries.insert(crate::model::fold(&name), item.clone());
                }
            }
        } else if self.ctx.in_proc_body {
            if let Some(proc_name) = self.ctx.current_proc.clone() {
                if let Some(proc) = self.model.get_proc_mut(&proc_name) {
                    proc.local_items.insert(crate::model::fold(&name), item.clone());
                }
            }
        }

        self.model.add_item(item);
    }

    fn handle_table(&mut self, statement: &str, line_num: usize) {
        let stmt = strip_semicolon(statement);
        let Some(caps) = TABLE_RE.captures(&stmt) else {
            return;
        };

        let name = caps[1].to_string();
        let dims_str = &caps[2];
        let attrs = caps.get(3).map(|m| m.as_str()).unwrap_or("").to_ascii_uppercase();

        let dimensions: Vec<(i64, i64)> = dims_str
            .split(',')
            .map(|dim| {
                let dim = dim.trim();
                if let Some((lower, upper)) = dim.split_once(':') {
                    (parse_int(lower), parse_int(upper))
                } else {
                    (1, parse_int(dim))
                }
            })
            .collect();

        let wordsize = TABLE_WORDSIZE_RE
            .captures(&attrs)
            .and_then(|c| c[1].parse::<i64>().ok());

        let mut table = Table::new(name.clone(), line_num);
        table.dimensions = dimensions;
        table.is_constant = attrs.contains("CONSTANT");
        table.is_static = attrs.contains("STATIC");
        table.is_parallel = attrs.contains("PARALLEL");
        table.wordsize = wordsize;

        self.model.add_table(table);
        self.ctx.current_table = Some(name);
    }

    fn handle_proc(&mut self, statement: &str, line_num: usize) {
        let stmt = strip_semicolon(statement);
        let Some(caps) = PROC_RE.captures(&stmt) else {
            return;
        };

        let name = caps[1].to_string();
        let params_str = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        let parameters = parse_parameters(params_str);

        let mut proc = Proc::new(name.clone(), line_num);
        proc.parameters = parameters;

        self.model.add_proc(proc);
        self.ctx.current_proc = Some(name);
    }

    fn handle_type(&mut self, statement: &str, line_num: usize) {
        let stmt = strip_semicolon(statement);
        let Some(caps) = TYPE_RE.captures(&stmt) else {
            return;
        };
        let name = caps[1].to_string();
        let description = caps[2].trim().to_string();
        self.model.types.insert(
            crate::model::fold(&name),
            TypeDecl {
                name,
                description,
                line: line_num,
            },
        );
    }

    fn handle_define(&mut self, statement: &str, line_num: usize) {
        let stmt = strip_semicolon(statement);
        let Some(caps) = DEFINE_RE.captures(&stmt) else {
            return;
        };
        let name = caps[1].to_string();
        let value = caps[2].trim().to_string();
        self.model.defines.insert(
            crate::model::fold(&name),
            Define {
                name,
                value,
                line: line_num,
            },
        );
    }

    fn handle_def(&mut self, statement: &str, line_num: usize) {
        let stmt = strip_semicolon(statement);
        let Some(caps) = DEF_RE.captures(&stmt) else {
            return;
        };
        let kind = caps.get(1).map(|m| m.as_str().to_ascii_uppercase());
        let name = caps[2].to_string();
        let effective_kind = kind.as_deref().unwrap_or("ITEM");

        if effective_kind == "ITEM" {
            self.model
                .add_item(Item::new(name.clone(), JovialType::Unknown, line_num));
        }
        // DEF TABLE / DEF PROC are recognised but, like the reference
        // implementation, produce no stub entry: a plain name import
        // without a shape to describe isn't enough to populate a Table
        // or Proc record.

        if self.ctx.in_compool {
            if let Some(compool_name) = self.ctx.current_compool.clone() {
                if let Some(compool) = self.model.compools.get_mut(&crate::model::fold(&compool_name)) {
                    match effective_kind {
                        "TABLE" => {
                            compool.tables.insert(name);
                        }
                        "PROC" => {
                            compool.procs.insert(name);
                        }
                        _ => {
                            compool.items.insert(name);
                        }
                    }
                }
            }
        }
    }

    fn handle_ref(&mut self, statement: &str, line_num: usize) {
        let stmt = strip_semicolon(statement);
        let Some(caps) = REF_RE.captures(&stmt) else {
            return;
        };
        let kind = caps
            .get(1)
            .map(|m| m.as_str().to_ascii_uppercase())
            .unwrap_or_else(|| "PROC".to_string());
        let name = caps[2].to_string();

        if kind == "PROC" {
            self.model.add_proc(Proc::new(name, line_num));
        }
    }
}

/// Strip J73 comments from a line. A `"` not inside a `'…'`-delimited
/// string begins a comment running to end of line. Apostrophes that are
/// actually part of an identifier (e.g. `FLIGHT'CONTROL`) still toggle
/// string mode — this is a known, preserved limitation (spec §9 Open
/// Question a): the two quoting conventions are not unified.
fn remove_comments(line: &str) -> String {
    let mut result = String::new();
    let mut in_string = false;
    for ch in line.chars() {
        if ch == '"' && !in_string {
            break;
        } else if ch == '\'' {
            in_string = !in_string;
            result.push(ch);
        } else {
            result.push(ch);
        }
    }
    result
}

/// Locate `name` (case-insensitively) within `line`, spec §4.3's
/// `[find(name), find(name)+len(name))`.
fn find_name_span(line: &str, name: &str) -> (usize, usize) {
    let upper_line = line.to_ascii_uppercase();
    let upper_name = name.to_ascii_uppercase();
    match upper_line.find(&upper_name) {
        Some(start) => (start, start + name.len()),
        None => (0, 0),
    }
}

fn parse_parameters(params_str: &str) -> Vec<(String, ParamMode)> {
    let params_str = params_str.trim();
    if params_str.is_empty() {
        return Vec::new();
    }

    if let Some((ins, outs)) = params_str.split_once(':') {
        let mut parameters = Vec::new();
        for p in ins.split(',') {
            let p = p.trim();
            if !p.is_empty() {
                parameters.push((p.to_string(), ParamMode::In));
            }
        }
        for p in outs.split(',') {
            let p = p.trim();
            if !p.is_empty() {
                parameters.push((p.to_string(), ParamMode::Out));
            }
        }
        parameters
    } else {
        params_str
            .split(',')
            .filter_map(|p| {
                let p = p.trim();
                if p.is_empty() {
                    None
                } else {
                    Some((p.to_string(), ParamMode::InOut))
                }
            })
            .collect()
    }
}

/// Parse `text` into a fresh [`SemanticModel`]. Convenience wrapper around
/// [`SemanticParser::new`] + [`SemanticParser::parse`] for callers that
/// don't need to reuse the parser instance.
pub fn parse(text: &str) -> SemanticModel {
    SemanticParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModuleType;

    const SCENARIO_A: &str = "START FLIGHT'CONTROL;\nDEFINE MAX'ALT = 50000;\nITEM ALTITUDE STATIC S 16;\nITEM MODE STATUS (V(NORMAL), V(WARN));\nTERM\n";

    const SCENARIO_B: &str =
        "TABLE WAYPOINTS (1:100);\nBEGIN\n  ITEM LAT F 32;\n  ITEM LON F 32;\nEND\n";

    #[test]
    fn scenario_a_basic_declarations() {
        let model = parse(SCENARIO_A);
        assert_eq!(model.program_name.as_deref(), Some("FLIGHT'CONTROL"));
        assert_eq!(model.module_type, Some(ModuleType::Main));
        assert_eq!(model.defines.get("MAX'ALT").unwrap().value, "50000");

        let altitude = model.get_item("ALTITUDE").unwrap();
        assert_eq!(altitude.jovial_type, JovialType::Signed);
        assert_eq!(altitude.size, Some(16));
        assert!(altitude.is_static);
        assert!(!altitude.is_constant);

        let mode = model.get_item("MODE").unwrap();
        assert_eq!(mode.jovial_type, JovialType::Status);
        assert_eq!(mode.status_values, vec!["NORMAL", "WARN"]);
    }

    #[test]
    fn scenario_b_table_with_entries() {
        let model = parse(SCENARIO_B);
        let table = model.get_table("WAYPOINTS").unwrap();
        assert_eq!(table.dimensions, vec![(1, 100)]);
        assert!(table.entries.contains_key("LAT"));
        assert!(table.entries.contains_key("LON"));
        for entry in table.entries.values() {
            assert_eq!(entry.jovial_type, JovialType::Float);
            assert_eq!(entry.size, Some(32));
            assert_eq!(entry.parent_table.as_deref(), Some("WAYPOINTS"));
        }
        assert!(model.get_item("LAT").is_some());
        assert!(model.get_item("LON").is_some());
    }

    #[test]
    fn scenario_c_proc_with_in_out_params() {
        let model = parse("PROC UPDATE'POS (NEW'LAT, NEW'LON : DISTANCE);\n");
        let proc = model.get_proc("UPDATE'POS").unwrap();
        assert_eq!(
            proc.parameters,
            vec![
                ("NEW'LAT".to_string(), ParamMode::In),
                ("NEW'LON".to_string(), ParamMode::In),
                ("DISTANCE".to_string(), ParamMode::Out),
            ]
        );
    }

    #[test]
    fn proc_empty_parens_has_zero_parameters() {
        let model = parse("PROC NOOP ();\n");
        assert!(model.get_proc("NOOP").unwrap().parameters.is_empty());
    }

    #[test]
    fn proc_without_colon_is_all_inout() {
        let model = parse("PROC SWAP (A, B);\n");
        let proc = model.get_proc("SWAP").unwrap();
        assert_eq!(
            proc.parameters,
            vec![
                ("A".to_string(), ParamMode::InOut),
                ("B".to_string(), ParamMode::InOut),
            ]
        );
    }

    #[test]
    fn table_bound_forms_agree() {
        let colon = parse("TABLE T (1:100);\n");
        let bare = parse("TABLE U (100);\n");
        assert_eq!(colon.get_table("T").unwrap().dimensions, vec![(1, 100)]);
        assert_eq!(bare.get_table("U").unwrap().dimensions, vec![(1, 100)]);
    }

    #[test]
    fn table_non_numeric_bound_becomes_zero() {
        let model = parse("TABLE T (LOW:HIGH);\n");
        assert_eq!(model.get_table("T").unwrap().dimensions, vec![(0, 0)]);
    }

    #[test]
    fn status_item_with_zero_v_tokens_is_empty() {
        let model = parse("ITEM FLAG STATUS;\n");
        assert!(model.get_item("FLAG").unwrap().status_values.is_empty());
    }

    #[test]
    fn multiline_item_records_line_of_terminating_semicolon() {
        let src = "ITEM\n  ALTITUDE\n  S 16;\n";
        let model = parse(src);
        let item = model.get_item("ALTITUDE").unwrap();
        assert_eq!(item.line, 2);
    }

    #[test]
    fn quote_at_column_zero_drops_whole_line() {
        let src = "\" entirely a comment\nITEM X S 16;\n";
        let model = parse(src);
        assert!(model.get_item("X").is_some());
        assert_eq!(model.items.len(), 1);
    }

    #[test]
    fn comment_after_statement_is_stripped() {
        let model = parse("ITEM X S 16; \" trailing note\n");
        assert!(model.get_item("X").is_some());
    }

    #[test]
    fn missing_end_leaves_line_end_at_default() {
        let model = parse("TABLE T (1:10);\nBEGIN\n  ITEM A S 8;\n");
        assert_eq!(model.get_table("T").unwrap().line_end, 0);
    }

    #[test]
    fn duplicate_top_level_declarations_overwrite() {
        let model = parse("ITEM X S 16;\nITEM X F 32;\n");
        assert_eq!(model.get_item("X").unwrap().jovial_type, JovialType::Float);
    }

    #[test]
    fn parse_is_deterministic() {
        let a = parse(SCENARIO_B);
        let b = parse(SCENARIO_B);
        assert_eq!(a.tables.keys().collect::<Vec<_>>(), b.tables.keys().collect::<Vec<_>>());
        assert_eq!(a.items.len(), b.items.len());
    }

    #[test]
    fn parse_is_idempotent_across_reuse_of_one_parser() {
        let mut parser = SemanticParser::new();
        let first = parser.parse(SCENARIO_A);
        let second = parser.parse(SCENARIO_A);
        assert_eq!(first.items.len(), second.items.len());
        assert_eq!(first.program_name, second.program_name);
    }

    #[test]
    fn compool_module_sets_module_type_and_import_set() {
        let model = parse(
            "COMPOOL SHARED'DATA;\nDEF ITEM FOO;\nDEF TABLE BARTAB;\nDEF PROC BAZPROC;\nTERM\n",
        );
        assert_eq!(model.module_type, Some(ModuleType::Compool));
        assert_eq!(model.program_name.as_deref(), Some("SHARED'DATA"));
        assert!(model.get_item("FOO").is_some());

        let compool = model.compools.get("SHARED'DATA").unwrap();
        assert!(compool.items.contains("FOO"));
        assert!(compool.tables.contains("BARTAB"));
        assert!(compool.procs.contains("BAZPROC"));
    }

    #[test]
    fn def_without_kind_defaults_to_item_import() {
        let model = parse("COMPOOL SHARED'DATA;\nDEF QUUX;\nTERM\n");
        let compool = model.compools.get("SHARED'DATA").unwrap();
        assert!(compool.items.contains("QUUX"));
        assert!(model.get_item("QUUX").is_some());
    }

    #[test]
    fn ref_proc_creates_stub_without_body() {
        let model = parse("REF PROC EXTERNAL'CALC;\n");
        let proc = model.get_proc("EXTERNAL'CALC").unwrap();
        assert!(proc.parameters.is_empty());
        assert_eq!(proc.line_start, 0);
    }

    #[test]
    fn full_proc_declaration_overwrites_ref_stub() {
        let model = parse("REF PROC UPDATE'POS;\nPROC UPDATE'POS (A : B);\n");
        let proc = model.get_proc("UPDATE'POS").unwrap();
        assert_eq!(proc.parameters.len(), 2);
    }

    #[test]
    fn item_initial_value_is_captured() {
        let model = parse("ITEM COUNT S 16 = 0;\n");
        assert_eq!(model.get_item("COUNT").unwrap().initial_value.as_deref(), Some("0"));
    }

    #[test]
    fn apostrophe_identifier_parses_as_one_name() {
        let model = parse("ITEM FLIGHT'CONTROL S 16;\n");
        assert!(model.get_item("FLIGHT'CONTROL").is_some());
    }

    #[test]
    fn item_column_span_is_within_final_line() {
        let model = parse("ITEM\n  ALTITUDE S 16;\n");
        let item = model.get_item("ALTITUDE").unwrap();
        let expected_col = "  ALTITUDE S 16;".to_ascii_uppercase().find("ALTITUDE").unwrap();
        assert_eq!(item.column_start, expected_col);
        assert_eq!(item.column_end, expected_col + "ALTITUDE".len());
    }

    #[test]
    fn type_declaration_records_free_text() {
        let model = parse("TYPE VECTOR3 S 16 FIXED POINT TRIPLE;\n");
        let t = model.types.get("VECTOR3").unwrap();
        assert!(t.description.contains("FIXED POINT TRIPLE"));
    }
}
