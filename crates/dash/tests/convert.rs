//! End-to-end conversion tests: markup in, Dash constructor code out.

use html2dash::codegen::py_string_literal;
use html2dash::{ComponentModule, Converter, PrettyPrinter, convert_html};
use std::collections::HashMap;

#[test]
fn simple_nesting_mirrors_the_markup() {
    let code = convert_html("<div><p>Hi</p></div>").unwrap();
    assert_eq!(code, r#"html.Div(children=[html.P(children=["Hi"])])"#);
}

#[test]
fn sibling_roots_are_wrapped_in_a_container_call() {
    let code = Converter::new()
        .convert_expression("<div>A</div><div>B</div>")
        .unwrap();
    assert_eq!(
        code,
        r#"html.Div(children=[html.Div(children=["A"]), html.Div(children=["B"])])"#
    );
}

#[test]
fn attribute_special_cases_render_as_dash_expects() {
    let code = Converter::new()
        .convert_expression(
            r#"<div class='bg-gray-800' style='color:red;margin:10px' aria-label="x">t</div>"#,
        )
        .unwrap();
    assert_eq!(
        code,
        r#"html.Div(className="bg-gray-800", style={"color": "red", "margin": "10px"}, **{"aria-label": "x"}, children=["t"])"#
    );
}

#[test]
fn disallowed_tags_are_unwrapped_without_their_text() {
    let code = Converter::new()
        .convert_expression("<div><script>var x = 1;</script><p>Hi</p></div>")
        .unwrap();
    assert_eq!(code, r#"html.Div(children=[html.P(children=["Hi"])])"#);
}

#[test]
fn long_output_is_reflowed_by_the_pretty_printer() {
    let code = convert_html(
        r##"<div class='bg-gray-800' style='color:red;margin:10px'><a href="#" id="link1">A</a></div>"##,
    )
    .unwrap();
    insta::assert_snapshot!(code, @r##"
    html.Div(
        className="bg-gray-800",
        style={"color": "red", "margin": "10px"},
        children=[html.A(href="#", id="link1", children=["A"])],
    )
    "##);
}

#[test]
fn svg_module_is_gated_behind_its_flag() {
    let markup = r##"<svg width="300" height="300"><rect x="100" y="100" width="100" height="100" fill="#e74c3c"></rect></svg>"##;

    let code = Converter::new()
        .enable_svg(true)
        .convert_expression(markup)
        .unwrap();
    assert_eq!(
        code,
        r##"dash_svg.Svg(width="300", height="300", children=[dash_svg.Rect(x="100", y="100", width="100", height="100", fill="#e74c3c")])"##
    );

    // Without the flag the svg subtree is fully unwrapped, leaving an
    // empty container.
    assert_eq!(
        Converter::new().convert_expression(markup).unwrap(),
        "html.Div()"
    );
}

#[test]
fn full_document_with_extras_renames_and_skips() {
    let markup = r##"
    <html>
    <body>
    <div>
        <input type="text" id="username" name="username" aria-label="Enter your username" aria-required="true">
        <div class='bg-gray-800' style='color:red;margin:10px'>
            <a href="#" id="link1">A</a>
        </div>
        <div>text</div>
        <svg></svg>
        <script></script>
        <div><a href="#" id="link2">B</a></div>
    </div>
    </body>
    </html>
    "##;

    let extra = ComponentModule::new("dcc").tag(
        "Input",
        &["id", "type", "placeholder", "aria-*"],
    );
    let converter = Converter::new()
        .extra_module(extra)
        .tag_map(HashMap::from([("svg".to_string(), "img".to_string())]))
        .skip_tags(["script"])
        .attr_formatter(|tag: &str, name: &str, value: &str| {
            (tag == "Input" && name == "type")
                .then(|| format!("kind={}", py_string_literal(value)))
        });

    let code = converter.convert_expression(markup).unwrap();
    let input = r#"dcc.Input(kind="text", id="username", **{"aria-label": "Enter your username"}, **{"aria-required": "true"})"#;
    let styled_div = r##"html.Div(className="bg-gray-800", style={"color": "red", "margin": "10px"}, children=[html.A(href="#", id="link1", children=["A"])])"##;
    let text_div = r#"html.Div(children=["text"])"#;
    let link_div = r##"html.Div(children=[html.A(href="#", id="link2", children=["B"])])"##;
    let expected =
        format!("html.Div(children=[{input}, {styled_div}, {text_div}, html.Img(), {link_div}])");
    assert_eq!(code, expected);
}

#[test]
fn global_camel_case_props_survive_lowercased_markup() {
    let code = Converter::new()
        .convert_expression(r#"<div tabindex="0" accesskey="k">t</div>"#)
        .unwrap();
    assert_eq!(
        code,
        r#"html.Div(tabIndex="0", accessKey="k", children=["t"])"#
    );
}

#[test]
fn document_with_no_convertible_content_becomes_an_empty_container() {
    let code = Converter::new()
        .convert_expression("<script>var x = 1;</script>")
        .unwrap();
    assert_eq!(code, "html.Div()");
}

#[test]
fn label_for_is_emitted_under_the_framework_keyword() {
    let code = Converter::new()
        .convert_expression(r#"<label for="username">Name</label>"#)
        .unwrap();
    assert_eq!(code, r#"html.Label(htmlFor="username", children=["Name"])"#);
}

#[test]
fn custom_code_formatter_replaces_the_builtin() {
    let tight = PrettyPrinter {
        width: 10,
        indent: 2,
    };
    let code = Converter::new()
        .code_formatter(tight)
        .convert("<ul><li>one</li></ul>")
        .unwrap();
    insta::assert_snapshot!(code, @r#"
    html.Ul(
      children=[
        html.Li(
          children=[
            "one",
          ],
        ),
      ],
    )
    "#);
}
