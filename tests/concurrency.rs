//! Models and expressions are plain owned values, so independent documents can be
//! processed on worker threads and shared afterwards.

use std::sync::Arc;

use msbuild_semantic::expression::parse_expression_list;
use msbuild_semantic::position::TextPositions;
use msbuild_semantic::syntax::parse_document;
use msbuild_semantic::{SemanticModel, XsNode};

fn project(index: usize) -> String {
    format!(
        r#"<Project>
  <PropertyGroup Condition=" '$(Configuration)' == 'Config{index}' ">
    <TargetFramework>net{index}.0</TargetFramework>
  </PropertyGroup>
  <ItemGroup>
    <Compile Include="File{index}.cs;Other{index}.cs" />
  </ItemGroup>
</Project>"#
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_build_models_in_parallel() {
    let texts: Vec<String> = (0..16).map(project).collect();
    let expected: Vec<SemanticModel> = texts
        .iter()
        .map(|text| SemanticModel::parse(text).unwrap())
        .collect();

    let handles: Vec<_> = texts
        .into_iter()
        .map(|text| tokio::task::spawn_blocking(move || SemanticModel::parse(&text)))
        .collect();

    for (handle, expected) in handles.into_iter().zip(&expected) {
        let model = handle.await.unwrap().unwrap();
        let nodes: Vec<&XsNode> = model.nodes().map(|(_, node)| node).collect();
        let expected: Vec<&XsNode> = expected.nodes().map(|(_, node)| node).collect();
        assert_eq!(nodes, expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_share_one_model_between_tasks() {
    let text = project(7);
    let document = parse_document(&text);
    let positions = TextPositions::new(&text);
    let model = Arc::new(SemanticModel::build(&document, &positions).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let model = Arc::clone(&model);
            tokio::task::spawn_blocking(move || {
                model
                    .nodes()
                    .filter_map(|(_, node)| match node {
                        XsNode::Attribute(attribute) => {
                            parse_expression_list(&attribute.value).ok()
                        }
                        _ => None,
                    })
                    .count()
            })
        })
        .collect();

    for handle in handles {
        // the condition parses, the file list is not an expression list
        assert_eq!(handle.await.unwrap(), 1);
    }
}
