/*! Run configuration.

Everything that describes *where* bulletins are and *how* they are delimited.
Defaults mirror the layout of the news archive this tool was written for,
and can be overridden by a JSON file (see [Config::from_path]):

```json
{
  "layout": {
    "years": [{ "label": "2021", "path": "/data/2021" }],
    "hours": [{ "dir": "6-8", "title": "0800" }]
  },
  "markers": { "separator": "אות מעבר" }
}
```

Missing keys fall back to their defaults.
!*/
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// In-text token separating two paragraphs of a bulletin.
pub const PARAGRAPH_SEPARATOR: &str = "אות מעבר";

/// Extension of bulletin files.
pub const DOCUMENT_EXTENSION: &str = "docx";

/// Years of the archive.
pub const DEFAULT_YEARS: [&str; 3] = ["2019", "2020", "2021"];

lazy_static! {
    /// Sign-off phrases closing a bulletin. Transcribers spell it with or without spaces.
    pub static ref END_NOTES: Vec<&'static str> = vec!["אות ס י ו ם", "אות סיום"];

    /// Editorial insert markers. A line holding one of these is not part of the broadcast.
    pub static ref ANNOTATION_TOKENS: Vec<&'static str> = vec!["(--", "--)", "----", "<<<", ">>>"];

    /// (hour bucket directory, hour title) pairs, in processing order.
    pub static ref HOUR_BUCKETS: Vec<(&'static str, &'static str)> =
        vec![("20-00", "2100"), ("6-8", "0800")];

    /// Words carrying no content in bulletins on top of the usual stopword lists.
    pub static ref CUSTOM_STOPWORDS: Vec<&'static str> = vec![
        "בעקבות", "נמסר", "כתבתנו", "כתבנו", "הבוקר", "הלילה", "אמש", "לענייני", "מוסר",
        "מוסרת", "כי", "כתב", "כתבת",
    ];

    pub static ref WEATHER_PATTERNS: Vec<&'static str> = vec![
        r"(תחזית\s)*מזג\s*(-|\s+)\s*האוויר\s*(:|-|,|;)(.|\n)*",
        r"תחזית מזג\s*(-|\s+)\s*האוויר(.|\n)*",
        r"(תחזית\s)*מזג\s*(-|\s+)\s*האוויר ל(.|\n)*",
        r"(תחזית\s)*מזג\s*(-|\s+)\s*האוויר מחר(.|\n)*",
        r"ו*התחזית",
        r"(תחזית\s)*מזג\s*(-|\s+)\s*האוויר הלילה(.|\n)*",
        r"(תחזית\s)*מזג\s*(-|\s+)\s*האוויר הערב(.|\n)*",
    ];

    pub static ref TRAFFIC_PATTERNS: Vec<&'static str> = vec![r"עדכוני תנועה(.|\n)*"];

    pub static ref TEMPLATE_PATTERNS: Vec<&'static str> = vec![
        r#"גלי\s*(\s+|-)\s*(צהל|צה"ל),*\s+השעה\s+.*\n"#,
        r"אלה החדשות (שעורכים|שעורך|שערך|שעורכת|שערכו).*",
        r"אלה החדשות.*",
    ];

    pub static ref OTHER_PATTERNS: Vec<&'static str> = vec![r"ב*בוקר טוב ישראל"];
}

fn owned(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

/// Tokens delimiting bulletins and their paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub separator: String,
    pub end_notes: Vec<String>,
    pub annotations: Vec<String>,
    pub extension: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            separator: PARAGRAPH_SEPARATOR.to_string(),
            end_notes: owned(&END_NOTES),
            annotations: owned(&ANNOTATION_TOKENS),
            extension: DOCUMENT_EXTENSION.to_string(),
        }
    }
}

/// A year label and the root of its bulletins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearDir {
    pub label: String,
    pub path: PathBuf,
}

impl YearDir {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Two last digits of the label, as found at the end of filename dates.
    pub fn short(&self) -> &str {
        let cut = self.label.len().saturating_sub(2);
        self.label.get(cut..).unwrap_or(&self.label)
    }
}

/// Hour bucket directory and the hour title opening bulletins stored in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBucket {
    pub dir: String,
    pub title: String,
}

impl HourBucket {
    pub fn new(dir: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            title: title.into(),
        }
    }

    /// Two-digit hour (`"2100"` -> `"21"`).
    pub fn hour(&self) -> &str {
        self.title.get(..2).unwrap_or(&self.title)
    }
}

/// Directory layout: `<year path>/<hour dir>/<month>/<file>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub years: Vec<YearDir>,
    pub hours: Vec<HourBucket>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            years: Vec::new(),
            hours: HOUR_BUCKETS
                .iter()
                .map(|(dir, title)| HourBucket::new(*dir, *title))
                .collect(),
        }
    }
}

impl Layout {
    /// Layout with one `<root>/<year>` directory per provided year label,
    /// using the default hour buckets.
    pub fn from_root(root: &Path, years: &[String]) -> Self {
        Self {
            years: years
                .iter()
                .map(|year| YearDir::new(year.clone(), root.join(year)))
                .collect(),
            ..Default::default()
        }
    }
}

/// Noise filter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    /// Removal patterns, applied in order.
    pub patterns: Vec<String>,
    pub stopwords: Vec<String>,
    /// Newline-separated stopword list, added to `stopwords`.
    pub stopwords_file: Option<PathBuf>,
    pub remove_stopwords: bool,
    /// Paragraphs with at most this many words are dropped.
    pub min_words: Option<usize>,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        let patterns = WEATHER_PATTERNS
            .iter()
            .chain(TRAFFIC_PATTERNS.iter())
            .chain(TEMPLATE_PATTERNS.iter())
            .chain(OTHER_PATTERNS.iter())
            .map(|p| p.to_string())
            .collect();
        Self {
            patterns,
            stopwords: owned(&CUSTOM_STOPWORDS),
            stopwords_file: None,
            remove_stopwords: false,
            min_words: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: Layout,
    pub markers: Markers,
    pub noise: NoiseSettings,
}

impl Config {
    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("loading configuration from {:?}", path);
        let f = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(f))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config() {
        let json = r#"{"layout": {"years": [{"label": "2021", "path": "/data/2021"}]}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.layout.years, vec![YearDir::new("2021", "/data/2021")]);
        assert_eq!(config.layout.hours.len(), 2);
        assert_eq!(config.markers, Markers::default());
    }

    #[test]
    fn hour_and_year_shorthands() {
        assert_eq!(HourBucket::new("20-00", "2100").hour(), "21");
        assert_eq!(YearDir::new("2019", "/").short(), "19");
    }

    #[test]
    fn from_root() {
        let layout = Layout::from_root(Path::new("/data"), &["2019".to_string()]);
        assert_eq!(layout.years[0].path, PathBuf::from("/data/2019"));
        assert_eq!(layout.hours[0], HourBucket::new("20-00", "2100"));
    }
}
