use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec!["Effective configuration:".to_string()];
	lines.push(format!(
		"  Region: {}",
		config
			.target
			.region
			.as_deref()
			.unwrap_or("(AWS CLI default)")
	));
	if let Some(profile) = &config.target.profile {
		lines.push(format!("  Profile: {profile}"));
	}
	lines.push(format!("  AWS CLI program: {}", config.program));
	lines.push(format!("  Cache: {}", bool_to_word(config.cache_enabled)));
	if config.cache_enabled {
		lines.push(format!("  Cache scope: {}", config.target.scope()));
	}
	lines.push(format!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(default)")
	));
	if let Some(title) = &config.title {
		lines.push(format!("  Title: {title}"));
	}
	if let Some(label) = &config.filter_label {
		lines.push(format!("  Filter label: {label}"));
	}
	if !config.initial_filter.is_empty() {
		lines.push(format!("  Initial filter: {}", config.initial_filter));
	}
	lines.push(format!("  Log level: {}", config.log_level));
	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
