pub mod report;
pub mod search;

use colored::Colorize;

pub fn print_banner() {
    let banner = r#"
         _  __ _
   ___  (_)/ _| |_
  / __| | | |_| __|
  \__ \ | |  _| |_
  |___/ |_|_|  \__|
"#;
    println!("{}", banner.bright_cyan().bold());
    println!(
        "  {} {}",
        "Sift".bright_white().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black()
    );
    println!("  {}\n", "Term-relevance crawler and page ranker".bright_black());
}
