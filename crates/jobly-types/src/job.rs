//! Job postings as the backend returns them.
//!
//! The backend is loose about shapes: ids arrive as numbers or strings,
//! scraped fields are frequently `null`, and `majors` is either a list or a
//! comma-joined string. Everything here decodes leniently into owned strings.

use serde::{Deserialize, Deserializer, Serialize};

/// Compact listing shown inline in the chat.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobSummary {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl JobSummary {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            description: description.into(),
        }
    }
}

/// Full record shown in the detail modal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub summary: JobSummary,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub remote_type: String,
    /// Newline-delimited free text
    #[serde(default, deserialize_with = "null_as_empty")]
    pub requirements: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience_level: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub education_level: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub salary_info: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub end_date: String,
    #[serde(default, deserialize_with = "string_list")]
    pub majors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contact_email: String,
}

impl JobDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }
}

impl From<JobSummary> for JobDetail {
    fn from(summary: JobSummary) -> Self {
        Self {
            summary,
            ..Default::default()
        }
    }
}

// ─── Lenient field decoders ──────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Str(String),
    Int(i64),
    Float(f64),
}

fn string_or_number<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(d)? {
        RawId::Str(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(f) => f.to_string(),
    })
}

fn null_as_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawList {
    Seq(Vec<Option<String>>),
    Joined(String),
}

fn string_list<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<RawList>::deserialize(d)? {
        None => return Ok(Vec::new()),
        Some(RawList::Seq(items)) => items.into_iter().flatten().collect::<Vec<_>>(),
        Some(RawList::Joined(s)) if s == "No especificado" => Vec::new(),
        Some(RawList::Joined(s)) => s.split(',').map(str::to_string).collect(),
    };
    Ok(items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}
