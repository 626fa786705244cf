use serde::Serialize;
use std::fmt;

/// Thumbnail shown next to a job, picked from the source website.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    BossAz,
    JobsearchAz,
    RabotaAz,
    BancoAz,
    Developer,
    Java,
    Net,
    Android,
    Sql,
    Python,
    Php,
}

/// Title keywords checked for aggregator sites, first hit wins.
const TITLE_KEYWORDS: [(&str, ImageSource); 6] = [
    ("java", ImageSource::Java),
    ("net", ImageSource::Net),
    ("android", ImageSource::Android),
    ("sql", ImageSource::Sql),
    ("python", ImageSource::Python),
    ("php", ImageSource::Php),
];

impl ImageSource {
    pub fn for_job(website: &str, job_title: &str) -> Self {
        match website {
            "boss.az" => Self::BossAz,
            "jobsearch.az" => Self::JobsearchAz,
            "rabota.az" => Self::RabotaAz,
            "banco.az" => Self::BancoAz,
            "careerbuilder.com" | "monster.de" => Self::from_title(job_title),
            _ => Self::JobsearchAz,
        }
    }

    fn from_title(job_title: &str) -> Self {
        let title = job_title.to_lowercase();
        TITLE_KEYWORDS
            .iter()
            .find(|(keyword, _)| title.contains(keyword))
            .map(|(_, source)| *source)
            .unwrap_or(Self::Developer)
    }

    pub fn as_path(&self) -> &'static str {
        match self {
            Self::BossAz => "/images/boss_az.png",
            Self::JobsearchAz => "/images/jobsearch_az.png",
            Self::RabotaAz => "/images/rabota_az.png",
            Self::BancoAz => "/images/banco_az.png",
            Self::Developer => "/images/developer.png",
            Self::Java => "/images/java.png",
            Self::Net => "/images/net.png",
            Self::Android => "/images/android.png",
            Self::Sql => "/images/sql.png",
            Self::Python => "/images/python.png",
            Self::Php => "/images/php.png",
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}
