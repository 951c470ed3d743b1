use folio_core::{
    CarouselId, Direction, LoadError, LoadPolicy, LoadResults, LoadState, PageEffect, PageEvent,
    PortfolioController, ResourceKind, SectionPlan, SiteConfig,
};

fn projects_json(count: usize) -> String {
    let items: Vec<String> = (1..=count)
        .map(|n| {
            format!(
                r#"{{"id": "project-{n}", "title": "Project {n}", "description": "Description {n}", "technologies": "Rust"}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

const BLOGS: &str = r#"[
    {"id": "blog-1", "title": "On carousels", "description": "Paging without a framework", "technologies": "HTML, CSS", "link": "https://dev.to/me/carousels"}
]"#;

const BACKGROUND: &str = r#"[
    {"year": "2019 - 2022", "title": "Engineer", "subtitle": "Acme", "description": "Internal tools"},
    {"year": 2023, "title": "Consultant", "subtitle": "Self-employed", "description": "Web work"}
]"#;

fn ok_results(projects: usize) -> LoadResults {
    LoadResults::from_bodies(
        Ok(projects_json(projects)),
        Ok(BLOGS.to_string()),
        Ok(BACKGROUND.to_string()),
    )
}

fn width(_: CarouselId) -> f64 {
    300.0
}

fn carousel_view(effects: &[PageEffect]) -> &folio_core::CarouselView {
    match effects {
        [PageEffect::Carousel(view)] => view,
        other => panic!("expected one carousel effect, got {other:?}"),
    }
}

#[test]
fn five_projects_render_and_page_to_offset_two() {
    let mut controller = PortfolioController::default();
    controller.begin_load();
    assert_eq!(controller.load_state(), LoadState::Loading);

    let plan = controller.finish_load(ok_results(5));
    assert_eq!(plan.state, LoadState::Loaded);
    assert_eq!(controller.load_state(), LoadState::Loaded);

    let resources: Vec<ResourceKind> = plan.sections.iter().map(SectionPlan::resource).collect();
    assert_eq!(
        resources,
        [ResourceKind::Background, ResourceKind::Projects, ResourceKind::Blogs]
    );
    let project_cards = plan
        .sections
        .iter()
        .find_map(|section| match section {
            SectionPlan::Cards {
                carousel: CarouselId::Projects,
                cards,
            } => Some(cards),
            _ => None,
        })
        .unwrap();
    assert_eq!(project_cards.len(), 5);
    assert_eq!(project_cards[0].card_class, "project-card");

    let views = controller.carousel_views(&width);
    let projects = &views[0];
    assert_eq!(projects.carousel, CarouselId::Projects);
    assert!(projects.buttons.prev_disabled);
    assert!(!projects.buttons.next_disabled);

    let nav = PageEvent::Nav {
        carousel: CarouselId::Projects,
        direction: Direction::Next,
    };
    controller.handle(nav.clone(), &width);
    let effects = controller.handle(nav.clone(), &width);
    let view = carousel_view(&effects);
    assert_eq!(view.offset, 2);
    assert_eq!(view.transform, "translateX(-640px)");
    assert!(view.buttons.next_disabled);

    let effects = controller.handle(nav, &width);
    assert_eq!(carousel_view(&effects).offset, 2);
}

#[test]
fn short_blog_carousel_has_both_buttons_disabled() {
    let mut controller = PortfolioController::default();
    controller.finish_load(ok_results(4));
    let views = controller.carousel_views(&width);
    let blogs = views
        .iter()
        .find(|view| view.carousel == CarouselId::Blogs)
        .unwrap();
    assert!(blogs.buttons.prev_disabled);
    assert!(blogs.buttons.next_disabled);
}

#[test]
fn all_or_nothing_replaces_every_section_with_errors() {
    let mut controller = PortfolioController::default();
    controller.begin_load();
    let results = LoadResults::from_bodies(
        Ok(projects_json(5)),
        Err(LoadError::network(ResourceKind::Blogs, "connection refused")),
        Ok(BACKGROUND.to_string()),
    );

    let plan = controller.finish_load(results);
    assert_eq!(plan.state, LoadState::Failed);
    let messages: Vec<&str> = plan
        .sections
        .iter()
        .map(|section| match section {
            SectionPlan::Error { message, .. } => *message,
            other => panic!("expected only error sections, got {other:?}"),
        })
        .collect();
    assert_eq!(
        messages,
        [
            "Error loading background",
            "Error loading projects",
            "Error loading blogs"
        ]
    );
    assert!(controller.index().is_empty());
    assert_eq!(controller.carousels().item_count(CarouselId::Projects), 0);
}

#[test]
fn isolated_policy_renders_successful_resources() {
    let config = SiteConfig {
        load_policy: LoadPolicy::Isolated,
        ..SiteConfig::default()
    };
    let mut controller = PortfolioController::new(config);
    let results = LoadResults::from_bodies(
        Ok(projects_json(5)),
        Err(LoadError::status(ResourceKind::Blogs, 500)),
        Ok(BACKGROUND.to_string()),
    );

    let plan = controller.finish_load(results);
    assert_eq!(plan.state, LoadState::Failed);
    assert!(matches!(plan.sections[0], SectionPlan::Timeline(ref rows) if rows.len() == 2));
    assert!(matches!(
        plan.sections[1],
        SectionPlan::Cards { carousel: CarouselId::Projects, ref cards } if cards.len() == 5
    ));
    assert_eq!(
        plan.sections[2],
        SectionPlan::Error {
            resource: ResourceKind::Blogs,
            message: "Error loading blogs"
        }
    );
    assert!(controller.index().get("project-3").is_some());
    assert!(controller.index().get("blog-1").is_none());
}

#[test]
fn resize_resets_every_carousel() {
    let mut controller = PortfolioController::default();
    controller.finish_load(ok_results(6));
    controller.handle(PageEvent::Key(folio_core::KeyInput::ArrowRight), &width);
    assert_eq!(controller.carousels().offset(CarouselId::Projects), 1);

    let effects = controller.handle(PageEvent::Resize, &width);
    assert_eq!(effects.len(), 2);
    for effect in effects {
        match effect {
            PageEffect::Carousel(view) => {
                assert_eq!(view.offset, 0);
                assert_eq!(view.transform, "translateX(0px)");
                assert!(view.buttons.prev_disabled);
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }
}
