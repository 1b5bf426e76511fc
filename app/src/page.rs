//! The landing page itself
//!
//! Builds the document the coordinator boots against: the same structure the
//! rendered markup has, with the hooks every controller looks for (tab
//! triggers, stat targets, reveal cards, the demo modal, the contact form).

use lumen_core::{Document, Node, Rect};

const VIEWPORT_HEIGHT: f64 = 900.0;
const PAGE_HEIGHT: f64 = 6200.0;

pub fn landing_page() -> Document {
    let mut doc = Document::new(VIEWPORT_HEIGHT, PAGE_HEIGHT);
    let body = doc.body();

    // Sticky header with the main navigation
    let header = doc.append(
        body,
        Node::new("header")
            .with_class("header")
            .with_bounds(Rect::new(0.0, 0.0, 1440.0, 72.0)),
    );
    let nav = doc.append(header, Node::new("nav").with_class("nav"));
    for (label, href) in [
        ("Features", "#features"),
        ("Pricing", "#pricing"),
        ("Docs", "#quickstart"),
        ("Contact", "#contact"),
    ] {
        doc.append(nav, Node::new("a").with_attr("href", href).with_text(label));
    }
    doc.append(header, Node::new("button").with_id("mobile-menu-toggle"));
    let menu = doc.append(header, Node::new("nav").with_id("mobile-menu"));
    for (label, href) in [("Features", "#features"), ("Pricing", "#pricing")] {
        doc.append(menu, Node::new("a").with_attr("href", href).with_text(label));
    }

    // Progress bar sits just under the header
    doc.append(body, Node::new("div").with_id("scroll-progress"));

    // Hero
    let hero = doc.append(
        body,
        Node::new("section")
            .with_id("hero")
            .with_bounds(Rect::new(72.0, 0.0, 1440.0, 720.0)),
    );
    doc.append(
        hero,
        Node::new("h1").with_text("Ship pipelines that explain themselves"),
    );
    doc.append(
        hero,
        Node::new("button")
            .with_id("play-demo")
            .with_text("Watch the demo"),
    );

    // Feature tabs
    let features = doc.append(
        body,
        Node::new("section")
            .with_id("features")
            .with_bounds(Rect::new(900.0, 0.0, 1440.0, 1100.0)),
    );
    for key in ["observe", "orchestrate", "optimize"] {
        doc.append(
            features,
            Node::new("button")
                .with_class("tab-button")
                .with_attr("data-tab", key),
        );
    }
    doc.append(features, Node::new("div").with_id("observe").with_class("tab-panel"));
    doc.append(features, Node::new("div").with_id("orchestrate").with_class("tab-panel"));
    doc.append(features, Node::new("div").with_id("optimize").with_class("tab-panel"));

    // Stats band
    let stats = doc.append(
        body,
        Node::new("section")
            .with_id("stats")
            .with_bounds(Rect::new(2100.0, 0.0, 1440.0, 360.0)),
    );
    for (target, top) in [("12000", 2160.0), ("98", 2160.0), ("340", 2160.0)] {
        doc.append(
            stats,
            Node::new("div")
                .with_class("stat-number")
                .with_attr("data-target", target)
                .with_bounds(Rect::new(top, 0.0, 200.0, 64.0)),
        );
    }

    // Benefit cards revealed on scroll
    let benefits = doc.append(
        body,
        Node::new("section")
            .with_id("benefits")
            .with_bounds(Rect::new(2560.0, 0.0, 1440.0, 900.0)),
    );
    for i in 0..3 {
        doc.append(
            benefits,
            Node::new("div")
                .with_class("animate-on-scroll")
                .with_bounds(Rect::new(2620.0 + 300.0 * i as f64, 0.0, 440.0, 260.0)),
        );
    }

    // Quickstart with a copyable install snippet
    let quickstart = doc.append(
        body,
        Node::new("section")
            .with_id("quickstart")
            .with_bounds(Rect::new(3560.0, 0.0, 1440.0, 500.0)),
    );
    let block = doc.append(
        quickstart,
        Node::new("div").with_id("install-snippet").with_class("code-block"),
    );
    doc.append(
        block,
        Node::new("code").with_text("curl -sSf https://get.lumen.dev | sh"),
    );

    // Pricing
    doc.append(
        body,
        Node::new("section")
            .with_id("pricing")
            .with_bounds(Rect::new(4160.0, 0.0, 1440.0, 800.0)),
    );

    // Contact form
    let contact = doc.append(
        body,
        Node::new("section")
            .with_id("contact")
            .with_bounds(Rect::new(5060.0, 0.0, 1440.0, 700.0)),
    );
    let form = doc.append(
        contact,
        Node::new("form")
            .with_id("demo-request")
            .with_attr("data-validate", "true"),
    );
    for field in ["name", "email", "company"] {
        doc.append(form, Node::new("input").with_attr("name", field));
    }
    doc.append(form, Node::new("button").with_text("Request a demo"));

    // Demo modal, hidden until opened
    let modal = doc.append(body, Node::new("div").with_id("demo-modal"));
    doc.append(modal, Node::new("div").with_class("modal-content"));

    doc
}
