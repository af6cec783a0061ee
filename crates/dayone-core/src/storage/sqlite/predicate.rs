//! Filter predicates and the entry query they compose into.
//!
//! A `SearchFilter` is first turned into a list of [`Predicate`]s that say
//! nothing about tables or columns. Rendering a `QueryPlan` is the only step
//! that produces SQL, binding every value positionally.

use rusqlite::types::Value;

use crate::media::MediaKind;
use crate::storage::schema::{TagJoin, ATTACHMENT_TABLE, ENTRY_COLUMNS, ENTRY_SOURCE, TAG_TABLE};
use crate::storage::types::{clamp_limit, SearchFilter};
use crate::time::{date_to_raw, parse_filter_date};

/// Attachment families an entry can be required to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaClass {
    Photo,
    Video,
    Audio,
}

/// One boolean condition on an entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Exact identifier match
    Identifier(String),
    /// Substring of the rich text or the markdown text
    TextContains(String),
    /// Entry carries this tag (case-sensitive)
    HasTag(String),
    Starred(bool),
    HasMedia(MediaClass),
    HasLocation(bool),
    CreationDevice(String),
    /// Created at or after this raw timestamp
    CreatedFrom(f64),
    /// Created strictly before this raw timestamp
    CreatedBefore(f64),
    /// Created inside any of these `[start, end)` raw windows
    CreatedWithin(Vec<(f64, f64)>),
    Journal(String),
}

impl Predicate {
    /// Render as a SQL condition over `e` (entry) and `j` (journal), with its parameters.
    pub fn to_sql(&self, tag_join: &TagJoin) -> (String, Vec<Value>) {
        match self {
            Predicate::Identifier(id) => ("e.ZUUID = ?".to_string(), vec![text(id)]),
            Predicate::TextContains(needle) => {
                let pattern = format!("%{}%", escape_like(needle));
                (
                    r"(e.ZRICHTEXTJSON LIKE ? ESCAPE '\' OR e.ZMARKDOWNTEXT LIKE ? ESCAPE '\')"
                        .to_string(),
                    vec![Value::Text(pattern.clone()), Value::Text(pattern)],
                )
            }
            Predicate::HasTag(tag) => (
                format!(
                    "EXISTS (SELECT 1 FROM {tags} t JOIN {join} zt ON t.Z_PK = zt.{tag_col} \
                     WHERE zt.{entry_col} = e.Z_PK AND t.ZNAME = ?)",
                    tags = TAG_TABLE,
                    join = tag_join.table,
                    tag_col = tag_join.tag_column,
                    entry_col = tag_join.entry_column,
                ),
                vec![text(tag)],
            ),
            Predicate::Starred(starred) => {
                ("e.ZSTARRED = ?".to_string(), vec![Value::Integer(i64::from(*starred))])
            }
            Predicate::HasMedia(class) => media_sql(*class),
            Predicate::HasLocation(true) => ("e.ZLOCATION IS NOT NULL".to_string(), Vec::new()),
            Predicate::HasLocation(false) => ("e.ZLOCATION IS NULL".to_string(), Vec::new()),
            Predicate::CreationDevice(device) => {
                ("e.ZCREATIONDEVICETYPE = ?".to_string(), vec![text(device)])
            }
            Predicate::CreatedFrom(raw) => ("e.ZCREATIONDATE >= ?".to_string(), vec![Value::Real(*raw)]),
            Predicate::CreatedBefore(raw) => ("e.ZCREATIONDATE < ?".to_string(), vec![Value::Real(*raw)]),
            Predicate::CreatedWithin(windows) if windows.is_empty() => ("0".to_string(), Vec::new()),
            Predicate::CreatedWithin(windows) => {
                let clauses = vec!["(e.ZCREATIONDATE >= ? AND e.ZCREATIONDATE < ?)"; windows.len()];
                let params = windows
                    .iter()
                    .flat_map(|(start, end)| [Value::Real(*start), Value::Real(*end)])
                    .collect();
                (format!("({})", clauses.join(" OR ")), params)
            }
            Predicate::Journal(name) => ("j.ZNAME = ?".to_string(), vec![text(name)]),
        }
    }
}

fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

fn media_sql(class: MediaClass) -> (String, Vec<Value>) {
    let condition = match class {
        MediaClass::Photo => format!("a.ZTYPE IN ({})", kind_list(&MediaKind::PHOTOS)),
        MediaClass::Video => format!("a.ZTYPE IN ({})", kind_list(&MediaKind::VIDEOS)),
        MediaClass::Audio => "a.ZISRECORDING = 1".to_string(),
    };
    let kinds: Vec<Value> = match class {
        MediaClass::Photo => MediaKind::PHOTOS.iter().map(|k| text(k.as_str())).collect(),
        MediaClass::Video => MediaKind::VIDEOS.iter().map(|k| text(k.as_str())).collect(),
        MediaClass::Audio => Vec::new(),
    };
    (
        format!(
            "EXISTS (SELECT 1 FROM {} a WHERE a.ZENTRY = e.Z_PK AND {})",
            ATTACHMENT_TABLE, condition
        ),
        kinds,
    )
}

fn kind_list(kinds: &[MediaKind]) -> String {
    vec!["?"; kinds.len()].join(", ")
}

/// Escape LIKE wildcards so the needle matches literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Predicates plus ordering and cap for one entry query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPlan {
    pub predicates: Vec<Predicate>,
    /// `None` returns every match
    pub limit: Option<usize>,
}

impl QueryPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(clamp_limit(limit));
        self
    }

    /// Build the plan for a search filter.
    ///
    /// Empty strings count as absent. A date bound that does not parse, or
    /// that does not exist in local time, is dropped rather than failing.
    pub fn from_filter(filter: &SearchFilter) -> Self {
        let mut plan = QueryPlan::new().limit(filter.limit);

        if let Some(needle) = non_empty(&filter.text) {
            plan.predicates.push(Predicate::TextContains(needle.to_string()));
        }
        for tag in filter.tags.iter().filter(|t| !t.is_empty()) {
            plan.predicates.push(Predicate::HasTag(tag.clone()));
        }
        if let Some(starred) = filter.starred {
            plan.predicates.push(Predicate::Starred(starred));
        }
        let media = [
            (filter.has_photos, MediaClass::Photo),
            (filter.has_videos, MediaClass::Video),
            (filter.has_audio, MediaClass::Audio),
        ];
        for (wanted, class) in media {
            if wanted == Some(true) {
                plan.predicates.push(Predicate::HasMedia(class));
            }
        }
        if let Some(has_location) = filter.has_location {
            plan.predicates.push(Predicate::HasLocation(has_location));
        }
        if let Some(device) = non_empty(&filter.creation_device) {
            plan.predicates.push(Predicate::CreationDevice(device.to_string()));
        }
        if let Some(from) = non_empty(&filter.date_from) {
            match parse_filter_date(from).and_then(date_to_raw) {
                Ok(raw) => plan.predicates.push(Predicate::CreatedFrom(raw)),
                Err(err) => tracing::debug!(date_from = from, error = %err, "skipping start date"),
            }
        }
        if let Some(to) = non_empty(&filter.date_to) {
            let end = parse_filter_date(to).and_then(|date| {
                let next = date
                    .succ_opt()
                    .ok_or_else(|| crate::DayOneError::InvalidDate(to.to_string()))?;
                date_to_raw(next)
            });
            match end {
                Ok(raw) => plan.predicates.push(Predicate::CreatedBefore(raw)),
                Err(err) => tracing::debug!(date_to = to, error = %err, "skipping end date"),
            }
        }
        if let Some(journal) = non_empty(&filter.journal) {
            plan.predicates.push(Predicate::Journal(journal.to_string()));
        }

        plan
    }

    /// Render `SELECT DISTINCT <entry columns> ... ORDER BY creation DESC [LIMIT ?]`.
    pub fn to_select_sql(&self, tag_join: &TagJoin) -> (String, Vec<Value>) {
        let mut conditions = Vec::with_capacity(self.predicates.len());
        let mut params = Vec::new();
        for predicate in &self.predicates {
            let (condition, values) = predicate.to_sql(tag_join);
            conditions.push(condition);
            params.extend(values);
        }

        let mut query = format!("SELECT DISTINCT {} FROM {}", ENTRY_COLUMNS, ENTRY_SOURCE);
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY e.ZCREATIONDATE DESC, e.Z_PK DESC");

        if let Some(limit) = self.limit {
            query.push_str(" LIMIT ?");
            params.push(Value::Integer(limit as i64));
        }

        (query, params)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
