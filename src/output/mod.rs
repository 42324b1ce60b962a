pub mod formatter;

pub use formatter::{
    format_age, format_job_list, format_match_detail, format_match_header, format_match_table,
    format_salary, format_score, format_tsv, should_use_colors,
};
