//! `storefront routes` - print the route table.

use storefront_gateway::Resolver;

/// One line per route: method padded to 7 columns, then the pattern.
pub fn format_routes(resolver: &Resolver) -> Vec<String> {
    resolver
        .routes()
        .map(|(method, pattern)| format!("{method:<7} {pattern}"))
        .collect()
}

pub fn execute(resolver: &Resolver) {
    for line in format_routes(resolver) {
        println!("{line}");
    }
}
