#![allow(dead_code)]

use materialweb::{Environment, Error, RenderConfig};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The Material environment with ids `t1`, `t2`, ...
pub fn env() -> Environment {
    init_logging();
    Environment::builder()
        .with_config(RenderConfig::new().with_sequential_ids("t"))
        .build()
        .expect("material library registers")
}

pub fn render(source: &str, data: Value) -> Result<String, Error> {
    env().render_str(source, data)
}

/// The value of the first `attr="..."` in `html`.
pub fn attr_value<'a>(html: &'a str, attr: &str) -> Option<&'a str> {
    let needle = format!(r#"{attr}=""#);
    let start = html.find(&needle)? + needle.len();
    html[start..].split('"').next()
}

/// Asserts that the fragments occur in `html` in the given order.
pub fn assert_in_order(html: &str, fragments: &[&str]) {
    let mut from = 0;
    for fragment in fragments {
        match html[from..].find(fragment) {
            Some(at) => from += at + fragment.len(),
            None => panic!("'{fragment}' not found after byte {from} in:\n{html}"),
        }
    }
}
