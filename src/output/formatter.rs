use std::io::IsTerminal;
use chrono::Duration;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::matching::JobMatches;
use crate::model::JobPosting;
use crate::scoring::{percent, JobMatch, MatchResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score in [0, 1] as a whole percentage ("83%")
pub fn format_score(score: f64) -> String {
    format!("{}%", percent(score))
}

/// Format a salary range in thousands ("120k-180k USD")
pub fn format_salary(job: &JobPosting) -> String {
    fn thousands(n: u64) -> String {
        if n >= 1_000 && n % 1_000 == 0 {
            format!("{}k", n / 1_000)
        } else if n >= 1_000 {
            format!("{:.1}k", n as f64 / 1_000.0)
        } else {
            n.to_string()
        }
    }
    format!(
        "{}-{} {}",
        thousands(job.salary.min),
        thousands(job.salary.max),
        job.currency
    )
}

/// Location with a remote marker
fn format_location(job: &JobPosting) -> String {
    if job.remote {
        format!("{} (remote)", job.location)
    } else {
        job.location.clone()
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate title to fit available width, accounting for Unicode
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// One-line summary above the ranked table
/// ("Sam Rivera: 2 of 4 matches, average 80%")
pub fn format_match_header(report: &JobMatches, use_colors: bool) -> String {
    let name = report.profile.display_name();
    let counts = format!(
        "{} of {} matches, average {}",
        report.matches.len(),
        report.total_matches,
        format_score(report.average_score())
    );
    if use_colors {
        format!("{}: {}", name.bold(), counts)
    } else {
        format!("{}: {}", name, counts)
    }
}

/// Format matches as a ranked table with columns: Index, Score, Title, Ref
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 4 chars wide (fits "100%")
pub fn format_match_table(matches: &[JobMatch], use_colors: bool) -> String {
    if matches.is_empty() {
        return "No matching jobs found.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 4;
    let separator = "  ";

    matches
        .iter()
        .enumerate()
        .map(|(idx, m)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!(
                "{:>width$}",
                format_score(m.result.score),
                width = score_width
            );

            let short_ref = m.job.short_ref();
            let fixed_width = index_width + 1 + score_width + separator.len() * 2 + short_ref.len();

            let title = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_title(&m.job.title, width - fixed_width)
                }
                Some(_) => truncate_title(&m.job.title, 20),
                None => m.job.title.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    title,
                    separator,
                    short_ref.underline()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, title, separator, short_ref
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format matches as tab-separated values for scripting
/// Columns: score percent, job id, title, company (no headers, no colors)
pub fn format_tsv(matches: &[JobMatch]) -> String {
    matches
        .iter()
        .map(|m| {
            format!(
                "{}\t{}\t{}\t{}",
                percent(m.result.score),
                m.job.id,
                m.job.title,
                m.job.company
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bullet_list(title: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = format!("\n  {}:", title);
    for item in items {
        out.push_str(&format!("\n    - {}", item));
    }
    out
}

/// Format one match with its breakdown and narrative
pub fn format_match_detail(job: &JobPosting, result: &MatchResult, use_colors: bool) -> String {
    let b = &result.breakdown;
    let header = format!("{} at {}", job.title, job.company);
    let overall = format_score(result.score);

    let mut out = if use_colors {
        format!(
            "{}\n  Match: {}\n  Location: {}\n  Salary: {}\n  Type: {}",
            header.bold(),
            overall.green().bold(),
            format_location(job).cyan(),
            format_salary(job),
            job.job_type.yellow()
        )
    } else {
        format!(
            "{}\n  Match: {}\n  Location: {}\n  Salary: {}\n  Type: {}",
            header,
            overall,
            format_location(job),
            format_salary(job),
            job.job_type
        )
    };

    out.push_str(&format!(
        "\n  Breakdown: skills {} | experience {} | salary {} | location {} | job type {}",
        format_score(b.skills),
        format_score(b.experience),
        format_score(b.salary),
        format_score(b.location),
        format_score(b.job_type)
    ));

    if !result.matched_skills.is_empty() {
        out.push_str(&format!("\n  Matched skills: {}", result.matched_skills.join(", ")));
    }
    if !result.missing_skills.is_empty() {
        out.push_str(&format!("\n  Missing skills: {}", result.missing_skills.join(", ")));
    }

    out.push_str(&bullet_list("Reasons", &result.reasons));
    out.push_str(&bullet_list("Strengths", &result.strengths));
    out.push_str(&bullet_list("Improvements", &result.improvements));
    out
}

/// Format search results one per line
/// Format: "{id}  {title} | {company} | {location} | {salary} | {age}"
pub fn format_job_list(jobs: &[&JobPosting], use_colors: bool) -> String {
    if jobs.is_empty() {
        return "No jobs found.".to_string();
    }

    jobs.iter()
        .map(|job| {
            let age = job.age().map(format_age).unwrap_or_else(|| "-".to_string());
            if use_colors {
                format!(
                    "{:>4}  {} | {} | {} | {} | {}",
                    job.id.dimmed(),
                    job.title.bold(),
                    job.company.yellow(),
                    format_location(job).cyan(),
                    format_salary(job),
                    age
                )
            } else {
                format!(
                    "{:>4}  {} | {} | {} | {} | {}",
                    job.id,
                    job.title,
                    job.company,
                    format_location(job),
                    format_salary(job),
                    age
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a duration into a human-readable age string
/// "today", "3d" for days, "2w" for weeks
pub fn format_age(duration: Duration) -> String {
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else {
        "today".to_string()
    }
}
