use crate::model::{ExperienceRange, JobPosting, JobType, SalaryRange};

/// Free-text query plus optional filters. Every filter that is set must pass.
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    pub text: Option<String>,
    pub location: Option<String>,
    pub salary: Option<SalaryRange>,
    pub experience: Option<ExperienceRange>,
    pub job_type: Option<JobType>,
    pub remote: Option<bool>,
}

fn matches_text(job: &JobPosting, needle: &str) -> bool {
    job.title.to_lowercase().contains(needle)
        || job.company.to_lowercase().contains(needle)
        || job.description.to_lowercase().contains(needle)
        || job
            .required_skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(needle))
}

impl JobQuery {
    pub fn matches(&self, job: &JobPosting) -> bool {
        if let Some(text) = self.text.as_deref().map(str::trim) {
            if !text.is_empty() && !matches_text(job, &text.to_lowercase()) {
                return false;
            }
        }

        // Remote postings pass any location filter
        if let Some(ref location) = self.location {
            if !job.remote && !job.location.to_lowercase().contains(&location.to_lowercase()) {
                return false;
            }
        }

        if let Some(ref salary) = self.salary {
            if !job.salary.overlaps(salary) {
                return false;
            }
        }

        if let Some(ref experience) = self.experience {
            if !job.experience.overlaps(experience) {
                return false;
            }
        }

        if let Some(job_type) = self.job_type {
            if job.job_type != job_type {
                return false;
            }
        }

        if let Some(remote) = self.remote {
            if job.remote != remote {
                return false;
            }
        }

        true
    }
}

/// Filter postings by query, preserving input order
pub fn search_jobs<'a>(jobs: &'a [JobPosting], query: &JobQuery) -> Vec<&'a JobPosting> {
    let results: Vec<&JobPosting> = jobs.iter().filter(|job| query.matches(job)).collect();
    tracing::info!(
        query = query.text.as_deref().unwrap_or(""),
        results = results.len(),
        "job search completed"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::fixtures::job;

    fn sample_jobs() -> Vec<JobPosting> {
        let mut backend = job("2");
        backend.title = "Backend Engineer".to_string();
        backend.company = "DataWorks".to_string();
        backend.description = "Own our ingestion pipeline".to_string();
        backend.required_skills = vec!["Rust".to_string(), "PostgreSQL".to_string()];
        backend.location = "Austin, TX".to_string();
        backend.remote = false;
        backend.salary = SalaryRange {
            min: 90_000,
            max: 110_000,
        };
        backend.experience = ExperienceRange { min: 2, max: 4 };
        backend.job_type = JobType::Contract;

        vec![job("1"), backend]
    }

    fn ids(results: &[&JobPosting]) -> Vec<String> {
        results.iter().map(|j| j.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_all() {
        let jobs = sample_jobs();
        assert_eq!(search_jobs(&jobs, &JobQuery::default()).len(), 2);
    }

    #[test]
    fn test_text_matches_title_company_description_skills() {
        let jobs = sample_jobs();
        for text in ["backend", "DATAWORKS", "ingestion", "postgres"] {
            let query = JobQuery {
                text: Some(text.to_string()),
                ..Default::default()
            };
            assert_eq!(ids(&search_jobs(&jobs, &query)), vec!["2"], "query {}", text);
        }
    }

    #[test]
    fn test_location_filter_lets_remote_through() {
        let jobs = sample_jobs();
        let query = JobQuery {
            location: Some("austin".to_string()),
            ..Default::default()
        };
        // Job 1 is remote, job 2 is in Austin
        assert_eq!(search_jobs(&jobs, &query).len(), 2);

        let query = JobQuery {
            location: Some("Chicago".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&search_jobs(&jobs, &query)), vec!["1"]);
    }

    #[test]
    fn test_salary_overlap_filter() {
        let jobs = sample_jobs();
        let query = JobQuery {
            salary: Some(SalaryRange {
                min: 150_000,
                max: 200_000,
            }),
            ..Default::default()
        };
        assert_eq!(ids(&search_jobs(&jobs, &query)), vec!["1"]);
    }

    #[test]
    fn test_experience_overlap_filter() {
        let jobs = sample_jobs();
        let query = JobQuery {
            experience: Some(ExperienceRange { min: 0, max: 2 }),
            ..Default::default()
        };
        assert_eq!(ids(&search_jobs(&jobs, &query)), vec!["2"]);
    }

    #[test]
    fn test_job_type_and_remote_filters_combine() {
        let jobs = sample_jobs();
        let query = JobQuery {
            job_type: Some(JobType::Contract),
            remote: Some(true),
            ..Default::default()
        };
        assert!(search_jobs(&jobs, &query).is_empty());

        let query = JobQuery {
            job_type: Some(JobType::FullTime),
            remote: Some(true),
            ..Default::default()
        };
        assert_eq!(ids(&search_jobs(&jobs, &query)), vec!["1"]);
    }
}
