//! Integration tests for the public Diagram API
//!
//! These tests drive whole diagrams through both back ends.

use float_cmp::assert_approx_eq;

use railroad::{
    Diagram, DiagramBuilder, Node, RailroadError,
    config::{DiagramType, Formatting, ParameterOverrides, Parameters},
};

fn select_diagram() -> Diagram {
    Diagram::new(vec![
        Node::sequence(vec![Node::terminal("foo"), Node::non_terminal("bar")])
            .expect("valid sequence"),
    ])
}

#[test]
fn test_content_width_adds_spacing_and_sentinels() {
    let diagram = select_diagram();
    // Start 20, foo 44, bar 44, spacing 20 around each box, End 20.
    let layout = diagram.layout();
    assert_approx_eq!(f32, layout.extent().width(), 168.0);

    let svg = diagram.to_svg_string().expect("Failed to render SVG");
    assert!(svg.contains(r#"width="208""#), "{svg}");
    assert!(svg.contains(r#"viewBox="0 0 208 62""#), "{svg}");
    assert!(svg.contains("foo"), "{svg}");
    assert!(svg.contains("bar"), "{svg}");
}

#[test]
fn test_text_keeps_sentinels_on_one_row() {
    let text = select_diagram()
        .to_text_string()
        .expect("Failed to render text");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "├┼──────│ foo │─────│ bar │─────┼┤");
}

#[test]
fn test_standalone_svg_is_self_contained() {
    let mut sink = Vec::new();
    select_diagram()
        .render_standalone_svg(&mut sink)
        .expect("Failed to render SVG");
    let svg = String::from_utf8(sink).expect("SVG is UTF-8");
    assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert!(svg.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#));
    assert!(svg.contains("<style>"));
}

#[test]
fn test_repeat_allowance_is_shared_by_both_back_ends() {
    let diagram = Diagram::new(vec![Node::one_or_more(
        Node::terminal("x"),
        Some(Node::comment("sep")),
    )]);
    let layout = diagram.layout();
    let repeat = &layout.children()[1];
    // Item down 11, separation 8, comment up 8 and down 8.
    assert_approx_eq!(f32, repeat.extent().down(), 35.0);

    let svg = diagram.to_svg_string().expect("Failed to render SVG");
    assert!(svg.contains(r#"viewBox="0 0 151 86""#), "{svg}");
    assert!(
        svg.contains("a10 10 0 0 0 -10 10v7a10 10 0 0 0 10 10"),
        "{svg}"
    );

    let text = diagram.to_text_string().expect("Failed to render text");
    assert!(text.contains("╰─sep─────╯"), "{text}");
}

#[test]
fn test_structural_errors_before_rendering() {
    let single = Node::alternating_sequence(vec![Node::terminal("a")]);
    assert!(matches!(single, Err(RailroadError::Structural(_))));

    let triple = Node::alternating_sequence(vec![
        Node::terminal("a"),
        Node::terminal("b"),
        Node::terminal("c"),
    ]);
    assert!(matches!(triple, Err(RailroadError::Structural(_))));

    let out_of_range = Node::choice(3, vec![Node::terminal("a")]);
    assert!(matches!(out_of_range, Err(RailroadError::Structural(_))));
}

#[test]
fn test_configuration_errors() {
    let unknown = Parameters::from_toml_str("arc_radius = 12\nnot_a_key = 1\n");
    assert!(matches!(unknown, Err(RailroadError::Configuration(_))));

    let negative = DiagramBuilder::default()
        .item(Node::terminal("a"))
        .overrides(ParameterOverrides::default().with_vertical_separation(-4.0))
        .build();
    assert!(matches!(negative, Err(RailroadError::Configuration(_))));

    let local = Node::choice(0, vec![Node::terminal("a"), Node::terminal("b")])
        .expect("valid choice")
        .with_overrides(ParameterOverrides::default().with_arc_radius(-30.0));
    let result = Diagram::new(vec![local]).to_svg_string();
    assert!(matches!(result, Err(RailroadError::Configuration(_))));
}

#[test]
fn test_parameters_from_toml() {
    let params = Parameters::from_toml_str("AR = 4.0\nformatting = \"ascii\"\n")
        .expect("valid parameters");
    let text = Diagram::new(vec![Node::terminal("a")])
        .with_parameters(params)
        .to_text_string()
        .expect("Failed to render text");
    assert!(text.contains("|+----| a |----+|"), "{text}");
}

#[test]
fn test_sink_failure_is_reported() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let result = select_diagram().render_svg(Broken);
    assert!(matches!(result, Err(RailroadError::RenderTarget(_))));
}

#[test]
fn test_sql_diagram_type() {
    let diagram = Diagram::new(vec![Node::terminal("a")]).with_overrides(
        ParameterOverrides::default()
            .with_diagram_type(DiagramType::Sql)
            .with_formatting(Formatting::Unicode),
    );
    let text = diagram.to_text_string().expect("Failed to render text");
    assert!(text.lines().nth(1).is_some_and(|row| row.starts_with('●')));
    assert!(text.lines().nth(1).is_some_and(|row| row.ends_with('►')));
}
