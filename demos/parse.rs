use msbuild_semantic::expression::{parse_expression_list, parse_simple_list};
use msbuild_semantic::SemanticModel;
use msbuild_semantic::XsNode;

fn main() -> anyhow::Result<()> {
    let mut json = false;
    let mut path = "demos/sample.proj".to_string();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => path = arg,
        }
    }
    let input = std::fs::read_to_string(&path)?;

    let model = SemanticModel::parse(&input)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    for (id, node) in model.nodes() {
        let validity = if node.is_valid() { "" } else { " (invalid)" };
        match node {
            XsNode::Attribute(attribute) => {
                println!(
                    "{id} {} attribute {}{validity}",
                    attribute.range, attribute.name
                );
                match parse_expression_list(&attribute.value) {
                    Ok(list) => println!("    expression: {:?}", list),
                    Err(error) => println!("    opaque: {:?} ({error})", attribute.value),
                }
            }
            XsNode::Text(text) => {
                println!("{id} {} text", text.range);
                if let Ok(list) = parse_simple_list(text.value.trim()) {
                    let items: Vec<&str> = list.items().map(|item| item.value.as_str()).collect();
                    println!("    items: {:?}", items);
                }
            }
            _ => println!(
                "{id} {} {:?} {}{validity}",
                node.range(),
                node.kind(),
                node.name().unwrap_or_default()
            ),
        }
    }

    Ok(())
}
