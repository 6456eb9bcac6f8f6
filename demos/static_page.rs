// Example: the site's header + listing page, driven by simulated clicks.
use pagekit::memory::MemoryDocument;
use pagekit::{BehaviorOptions, Dom, initialize};

fn main() {
    let doc = MemoryDocument::new();

    let toggle = doc
        .element("button")
        .with_class("nav-toggle")
        .with_attribute("aria-expanded", "false")
        .with_attribute("aria-controls", "navMenu")
        .node();
    let nav = doc.element("nav").with_id("navMenu").with_class("nav").node();

    let mut links = Vec::new();
    for section in ["jobs", "results", "schemes", "archive"] {
        let href = format!("#{section}");
        links.push((href.clone(), doc.element("a").with_attribute("href", &href).node()));
    }
    // No "archive" section on this page: that link keeps the browser's default jump.
    for section in ["jobs", "results", "schemes"] {
        doc.element("section").with_id(section);
    }

    let bindings = initialize(&doc, &BehaviorOptions::default()).expect("bind behaviors");
    println!("bound: {bindings:?}");

    for (href, link) in &links {
        let outcome = doc.click(*link);
        println!("click {href:<10} -> {outcome:?}");
    }
    for req in doc.scroll_log() {
        println!(
            "scrollIntoView #{} {:?}",
            doc.attribute(req.node, "id").unwrap_or_default(),
            req.options
        );
    }

    for _ in 0..3 {
        doc.click(toggle);
        println!(
            "nav open={} aria-expanded={}",
            doc.has_class(&nav, "open"),
            doc.attribute(toggle, "aria-expanded").unwrap_or_default()
        );
    }
}
