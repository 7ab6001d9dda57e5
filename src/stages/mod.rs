pub mod stage1_resume_parser;
pub mod stage2_jd_analyzer;
pub mod stage3_match_scorer;
pub mod stage4_report;

pub use stage1_resume_parser::*;
pub use stage2_jd_analyzer::*;
pub use stage3_match_scorer::*;
pub use stage4_report::*;
