//! Recent-projects record parsing
//!
//! Current IDE versions store one `entry` per project under
//! `component[@name=RecentProjectsManager]/option[@name=additionalInfo]/map`,
//! each carrying a `RecentProjectMetaInfo` with millisecond timestamps:
//!
//! ```xml
//! <application>
//!   <component name="RecentProjectsManager">
//!     <option name="additionalInfo">
//!       <map>
//!         <entry key="$USER_HOME$/IdeaProjects/demo">
//!           <value>
//!             <RecentProjectMetaInfo opened="true">
//!               <option name="activationTimestamp" value="1700000000000" />
//!               <option name="projectOpenTimestamp" value="1699990000000" />
//!             </RecentProjectMetaInfo>
//!           </value>
//!         </entry>
//!       </map>
//!     </option>
//!   </component>
//! </application>
//! ```
//!
//! Older versions only keep `option[@name=recentPaths]/list/option[@value]`,
//! newest first and without timestamps.

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

use crate::error::{ProjectsError, Result};

/// Placeholder IDEs write for the user's home directory
pub const USER_HOME_MACRO: &str = "$USER_HOME$";

const MANAGER_COMPONENTS: &[&str] = &[
    "RecentProjectsManager",
    "RecentDirectoryProjectsManager",
    "RiderRecentProjectsManager",
];

const TIMESTAMP_OPTIONS: &[&str] = &["activationTimestamp", "projectOpenTimestamp"];

/// A project as listed in the record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntry {
    pub path: String,
    pub last_opened: Option<DateTime<Utc>>,
}

impl RecentEntry {
    fn new(raw_path: &str) -> Option<Self> {
        let path = raw_path.replace(USER_HOME_MACRO, "~");
        if path.is_empty() {
            return None;
        }
        Some(Self {
            path,
            last_opened: None,
        })
    }

    fn observe_timestamp(&mut self, millis: i64) {
        let Some(ts) = DateTime::<Utc>::from_timestamp_millis(millis) else {
            return;
        };
        match self.last_opened {
            Some(current) if current >= ts => {}
            _ => self.last_opened = Some(ts),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    AdditionalInfo,
    RecentPaths,
}

/// Tracks where in the document we are; depths are element nesting levels
#[derive(Default)]
struct Walker {
    depth: usize,
    component: Option<usize>,
    section: Option<(Section, usize)>,
    entry: Option<(usize, RecentEntry)>,
    additional_info: Vec<RecentEntry>,
    recent_paths: Vec<RecentEntry>,
}

impl Walker {
    fn open(&mut self, e: &BytesStart, depth: usize, is_empty: bool) -> Result<()> {
        let name = e.name();
        let name = name.as_ref();

        let Some(component_depth) = self.component else {
            if name == b"component" && !is_empty {
                if let Some(component) = attr(e, "name")? {
                    if MANAGER_COMPONENTS.contains(&component.as_str()) {
                        self.component = Some(depth);
                    }
                }
            }
            return Ok(());
        };

        let Some((section, _)) = self.section else {
            if name == b"option" && depth == component_depth + 1 && !is_empty {
                self.section = match attr(e, "name")?.as_deref() {
                    Some("additionalInfo") => Some((Section::AdditionalInfo, depth)),
                    Some("recentPaths") => Some((Section::RecentPaths, depth)),
                    _ => None,
                };
            }
            return Ok(());
        };

        match section {
            Section::AdditionalInfo => {
                if let Some((_, entry)) = &mut self.entry {
                    if name == b"option"
                        && attr(e, "name")?
                            .as_deref()
                            .is_some_and(|o| TIMESTAMP_OPTIONS.contains(&o))
                    {
                        if let Some(millis) = attr(e, "value")?.and_then(|v| v.parse().ok()) {
                            entry.observe_timestamp(millis);
                        }
                    }
                } else if name == b"entry" {
                    let Some(entry) = attr(e, "key")?.as_deref().and_then(RecentEntry::new)
                    else {
                        return Ok(());
                    };
                    if is_empty {
                        self.additional_info.push(entry);
                    } else {
                        self.entry = Some((depth, entry));
                    }
                }
            }
            Section::RecentPaths => {
                if name == b"option" {
                    if let Some(entry) = attr(e, "value")?.as_deref().and_then(RecentEntry::new) {
                        self.recent_paths.push(entry);
                    }
                }
            }
        }
        Ok(())
    }

    fn close(&mut self, depth: usize) {
        if self.entry.as_ref().is_some_and(|(d, _)| *d == depth) {
            if let Some((_, entry)) = self.entry.take() {
                self.additional_info.push(entry);
            }
        } else if self.section.is_some_and(|(_, d)| d == depth) {
            self.section = None;
        } else if self.component == Some(depth) {
            self.component = None;
        }
    }

    fn finish(self) -> Vec<RecentEntry> {
        if !self.additional_info.is_empty() {
            return self.additional_info;
        }
        // recentPaths lists newest first; normalize to oldest first
        let mut legacy = self.recent_paths;
        legacy.reverse();
        legacy
    }
}

fn attr(e: &BytesStart, key: &str) -> Result<Option<String>> {
    match e.try_get_attribute(key)? {
        Some(a) => Ok(Some(a.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

/// Parse a recent-projects record
///
/// Entries are returned oldest first, the order IDEs append them in.
pub fn parse_recent_projects(xml: &str) -> Result<Vec<RecentEntry>> {
    let mut reader = Reader::from_str(xml);
    let mut walker = Walker::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                walker.depth += 1;
                let depth = walker.depth;
                walker.open(&e, depth, false)?;
            }
            Event::Empty(e) => {
                let depth = walker.depth + 1;
                walker.open(&e, depth, true)?;
            }
            Event::End(_) => {
                let depth = walker.depth;
                walker.close(depth);
                walker.depth = walker.depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(walker.finish())
}

/// Read and parse a record file
///
/// A missing file is an empty record.
pub fn read_recent_projects(path: &Path) -> Result<Vec<RecentEntry>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No recent projects file at {}", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ProjectsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let content = String::from_utf8(bytes).map_err(|source| ProjectsError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    parse_recent_projects(&content)
}

/// Order entries newest first
///
/// Input is oldest first. Entries with a timestamp sort by it, descending;
/// entries without one keep their reversed record order after them.
pub fn sort_by_recency(mut entries: Vec<RecentEntry>) -> Vec<RecentEntry> {
    entries.reverse();
    entries.sort_by(|a, b| b.last_opened.cmp(&a.last_opened));
    entries
}
