pub const PROMPT_URL: &str = "Website URL: ";
pub const PROMPT_KEYWORD: &str = "Target Keyword: ";
pub const BANNER: &str = "On-Page SEO Analysis Tool";
pub const BANNER_HINT: &str =
    "Analyzes on-page SEO issues for a URL and target keyword. Press Ctrl-D to quit.";
pub const LOADING: &str = "Analyzing...";
pub const URL_DISPLAY_LIMIT: usize = 30;
