use ios_config_core::ConfigLineIndex;
use regex::Regex;

/// Render the block hierarchy of a configuration down to `max_depth` levels.
///
/// Only top-level headers matching `filter` are rendered when one is given.
/// Depth 0 prints the headers alone.
pub fn render_config_tree(index: &ConfigLineIndex, max_depth: usize, filter: Option<&Regex>) -> String {
    let mut out = String::new();
    for header in index.top_level() {
        let Some(line) = index.line(header) else {
            continue;
        };
        if line.trim().is_empty() || line.starts_with('!') {
            continue;
        }
        if filter.is_some_and(|re| !re.is_match(line)) {
            continue;
        }
        render_line(index, header, 0, max_depth, &mut out);
    }
    out
}

fn render_line(index: &ConfigLineIndex, line: usize, depth: usize, max_depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let text = index.line(line).unwrap_or_default().trim();
    out.push_str(&format!("{indent}{text}\n"));

    if depth >= max_depth {
        return;
    }

    for child in index.child_indices(line) {
        render_line(index, child, depth + 1, max_depth, out);
    }
}

#[cfg(test)]
mod tests {
    use ios_config_core::ConfigLineIndex;
    use regex::Regex;

    use super::render_config_tree;

    const CONFIG: &str = "hostname SW1\n!\ninterface GigabitEthernet1/0/1\n description desk\n switchport access vlan 10\nrouter ospf 1\n address-family ipv4\n  network 10.0.0.0\n";

    #[test]
    fn renders_nested_children_with_depth_limit() {
        let index = ConfigLineIndex::new(CONFIG);
        let tree = render_config_tree(&index, 1, None);
        assert_eq!(
            tree,
            "hostname SW1\ninterface GigabitEthernet1/0/1\n  description desk\n  switchport access vlan 10\nrouter ospf 1\n  address-family ipv4\n"
        );
    }

    #[test]
    fn filter_limits_top_level_headers() {
        let index = ConfigLineIndex::new(CONFIG);
        let filter = Regex::new(r"^router").unwrap();
        let tree = render_config_tree(&index, 5, Some(&filter));
        assert_eq!(tree, "router ospf 1\n  address-family ipv4\n    network 10.0.0.0\n");
    }
}
