//! Replays carousel navigation against loaded data, without a browser.

use folio_core::{
    CarouselId, CarouselView, Direction, LoadResults, PageEffect, PageEvent, PortfolioController,
    SiteConfig,
};

/// One scripted step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Move(Direction),
    Reset,
}

/// Parses a comma-separated script such as `+1,+1,-1,reset`.
pub fn parse_steps(script: &str) -> Result<Vec<Step>, String> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token {
            "+1" | "1" | "next" => Ok(Step::Move(Direction::Next)),
            "-1" | "prev" => Ok(Step::Move(Direction::Prev)),
            "reset" | "resize" => Ok(Step::Reset),
            other => Err(format!(
                "unknown step `{other}`; expected +1|-1|next|prev|reset"
            )),
        })
        .collect()
}

/// Runs `steps` on `carousel` and returns the view after each one.
pub fn run(
    config: SiteConfig,
    results: LoadResults,
    carousel: CarouselId,
    steps: &[Step],
    item_width_px: f64,
) -> Vec<CarouselView> {
    let mut controller = PortfolioController::new(config);
    controller.finish_load(results);
    let metrics = move |_: CarouselId| item_width_px;

    let mut views = Vec::with_capacity(steps.len());
    for step in steps {
        let event = match step {
            Step::Move(direction) => PageEvent::Nav {
                carousel,
                direction: *direction,
            },
            Step::Reset => PageEvent::Resize,
        };
        views.extend(
            controller
                .handle(event, &metrics)
                .into_iter()
                .filter_map(|effect| match effect {
                    PageEffect::Carousel(view) if view.carousel == carousel => Some(view),
                    _ => None,
                }),
        );
    }
    views
}

#[cfg(test)]
mod tests {
    use super::{parse_steps, run, Step};
    use folio_core::{CarouselId, Direction, LoadResults, SiteConfig};

    #[test]
    fn parses_step_aliases() {
        assert_eq!(
            parse_steps("+1, next ,-1,reset,").expect("aliases parse"),
            vec![
                Step::Move(Direction::Next),
                Step::Move(Direction::Next),
                Step::Move(Direction::Prev),
                Step::Reset,
            ]
        );
        assert!(parse_steps("+2")
            .expect_err("two-step move is rejected")
            .contains("unknown step"));
    }

    #[test]
    fn replays_against_five_projects() {
        let projects = r#"[{"id":"1"},{"id":"2"},{"id":"3"},{"id":"4"},{"id":"5"}]"#;
        let results = LoadResults::from_bodies(
            Ok(projects.to_string()),
            Ok("[]".to_string()),
            Ok("[]".to_string()),
        );
        let steps = parse_steps("+1,+1,+1,reset").expect("steps parse");
        let views = run(SiteConfig::default(), results, CarouselId::Projects, &steps, 300.0);

        let offsets: Vec<usize> = views.iter().map(|view| view.offset).collect();
        assert_eq!(offsets, [1, 2, 2, 0]);
        assert_eq!(views[1].transform, "translateX(-640px)");
        assert!(views[2].buttons.next_disabled);
        assert_eq!(views[3].transform, "translateX(0px)");
    }
}
