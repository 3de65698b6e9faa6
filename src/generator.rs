//! Demo dataset generator / 演示数据生成器
//!
//! Produces synthetic records across four families (person, files, chat, list).
//! The random source is injectable so tests can use a seeded `StdRng`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::models::{Record, RecordKind, ACTIVE_STATUS};

const PERSON_NAMES: [&str; 12] = [
    "Alice Johnson", "Bob Smith", "Charlie Brown", "Diana Prince",
    "Ethan Hunt", "Fiona Gallagher", "George Clooney", "Hannah Lee",
    "Ivy Adams", "Jack Sparrow", "Katherine Blake", "Liam Carter",
];

const FILE_NAMES: [&str; 4] = ["report.docx", "invoice.pdf", "notes.txt", "resume.docx"];
const IMAGE_NAMES: [&str; 4] = ["design.png", "mockup.jpg", "screenshot.webp", "banner.png"];
const VIDEO_NAMES: [&str; 4] = ["intro.mp4", "tutorial.mov", "demo.avi", "reel.mp4"];
const FOLDER_NAMES: [&str; 4] = ["Project Alpha", "Designs", "Backups", "Resources"];

const CHAT_NAMES: [&str; 6] = [
    "Team Standup", "Project Kickoff", "Design Review",
    "Client Feedback", "Weekend Plans", "Marketing Sync",
];

const LIST_NAMES: [&str; 6] = [
    "To-do List", "Shopping List", "Reading List",
    "Bug Fixes", "Feature Requests", "Wishlist",
];

/// Avatar ids served by the placeholder service / 头像编号上限
const AVATAR_COUNT: u32 = 70;

/// Top-level draw before any subtype is picked / 生成时的一级类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Person,
    Files,
    Chat,
    List,
}

impl Family {
    pub const ALL: [Family; 4] = [Family::Person, Family::Files, Family::Chat, Family::List];
}

/// Build the link for a record name / 生成记录链接
pub fn make_link(name: &str) -> String {
    format!("/search?value={}", urlencoding::encode(name))
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Dataset generator over any random source / 数据生成器
pub struct DatasetGenerator<R> {
    rng: R,
}

impl DatasetGenerator<StdRng> {
    /// Reproducible generator / 可复现的生成器
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> DatasetGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `count` records with ids `1..=count` / 生成指定数量的记录
    ///
    /// A negative count is rejected with `Error::InvalidArgument`.
    pub fn generate(&mut self, count: i64) -> Result<Vec<Record>> {
        if count < 0 {
            return Err(Error::invalid_argument(format!(
                "record count must be non-negative, got {}",
                count
            )));
        }

        let records: Vec<Record> = (1..=count as u64)
            .map(|id| {
                let family = Family::ALL[self.rng.gen_range(0..Family::ALL.len())];
                self.record_for(id, family)
            })
            .collect();

        tracing::debug!("Generated {} demo records", records.len());
        Ok(records)
    }

    /// Build one record of a forced family / 生成指定类别的单条记录
    pub fn record_for(&mut self, id: u64, family: Family) -> Record {
        let rng = &mut self.rng;
        let (kind, name, status) = match family {
            Family::Person => {
                let name = pick(rng, &PERSON_NAMES);
                let status = if rng.gen_bool(0.5) { ACTIVE_STATUS } else { "Inactive" };
                let avatar = format!(
                    "https://i.pravatar.cc/40?img={}",
                    rng.gen_range(1..=AVATAR_COUNT)
                );
                (RecordKind::Person { avatar }, name, status.to_string())
            }
            Family::Files => {
                let (kind, pool) = match rng.gen_range(0..4) {
                    0 => (RecordKind::File, &FILE_NAMES),
                    1 => (RecordKind::Image, &IMAGE_NAMES),
                    2 => (RecordKind::Video, &VIDEO_NAMES),
                    _ => (RecordKind::Folder, &FOLDER_NAMES),
                };
                let name = pick(rng, pool);
                let status = format!("Edited {}d ago", rng.gen_range(0..30));
                (kind, name, status)
            }
            Family::Chat => {
                let name = pick(rng, &CHAT_NAMES);
                let status = format!("Last message {}h ago", rng.gen_range(0..12));
                (RecordKind::Chat, name, status)
            }
            Family::List => {
                let name = pick(rng, &LIST_NAMES);
                let items = rng.gen_range(1..=20);
                let days = rng.gen_range(0..10);
                let status = format!("{} items • Updated {}d ago", items, days);
                (RecordKind::List, name, status)
            }
        };

        Record {
            id,
            name: name.to_string(),
            status,
            link: make_link(name),
            kind,
        }
    }
}

/// Generate a dataset, seeded when a seed is given / 生成演示数据
pub fn generate(count: i64, seed: Option<u64>) -> Result<Vec<Record>> {
    match seed {
        Some(seed) => DatasetGenerator::seeded(seed).generate(count),
        None => DatasetGenerator::from_entropy().generate(count),
    }
}
