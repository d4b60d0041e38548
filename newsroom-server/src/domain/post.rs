use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(author_id: Uuid, title: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Creation-date bucket accepted by the post list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    #[serde(alias = "Today")]
    Today,
    #[serde(alias = "Older")]
    Older,
}

/// Predicate applied to the post list. At most one predicate is active per
/// request: an author filter wins over a date filter, and with neither the
/// list is unfiltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFilter {
    All,
    ByAuthor(Uuid),
    FromToday,
    OldNews,
}

impl PostFilter {
    pub fn resolve(author: Option<Uuid>, date: Option<DateFilter>) -> Self {
        match (author, date) {
            (Some(author_id), _) => PostFilter::ByAuthor(author_id),
            (None, Some(DateFilter::Today)) => PostFilter::FromToday,
            (None, Some(DateFilter::Older)) => PostFilter::OldNews,
            (None, None) => PostFilter::All,
        }
    }
}

/// Midnight UTC of the current day, the boundary between the `today` and
/// `older` buckets.
pub fn start_of_today() -> DateTime<Utc> {
    Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn author_filter_wins_over_date() {
        let author_id = Uuid::new_v4();
        assert_eq!(
            PostFilter::resolve(Some(author_id), Some(DateFilter::Today)),
            PostFilter::ByAuthor(author_id)
        );
    }

    #[test]
    fn date_filter_applies_without_author() {
        assert_eq!(
            PostFilter::resolve(None, Some(DateFilter::Today)),
            PostFilter::FromToday
        );
        assert_eq!(
            PostFilter::resolve(None, Some(DateFilter::Older)),
            PostFilter::OldNews
        );
    }

    #[test]
    fn no_params_means_unfiltered() {
        assert_eq!(PostFilter::resolve(None, None), PostFilter::All);
    }

    #[test]
    fn start_of_today_is_midnight() {
        let boundary = start_of_today();
        assert_eq!(boundary.hour(), 0);
        assert_eq!(boundary.minute(), 0);
        assert_eq!(boundary.second(), 0);
        assert!(boundary <= Utc::now());
    }

    #[test]
    fn date_filter_accepts_capitalized_alias() {
        // the original UI submitted "Today" with a capital T
        let today: DateFilter = serde_json::from_str("\"Today\"").unwrap();
        assert_eq!(today, DateFilter::Today);
        let older: DateFilter = serde_json::from_str("\"older\"").unwrap();
        assert_eq!(older, DateFilter::Older);
    }
}
