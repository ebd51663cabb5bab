//! Content-page pipeline: a fixed DAG from product record to JSON pages on disk
//!
//! Nodes run one at a time in [`PipelineNode::EXECUTION_ORDER`]; each checks
//! that its dependencies have finished before it starts. The final
//! `output_writer` node is [`PageSet::write_to`].

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use serde_json::Value;

use shared::{ProcessId, process_debug};
use crate::error::{ProducerError, ProducerResult};
use crate::pages::product::Product;
use crate::pages::questions::generate_questions;
use crate::pages::templates::{Page, PageInputs, TemplateRegistry};

/// Label recorded in `dag_metadata.json`
pub const PIPELINE_FRAMEWORK: &str = "static-dag";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineNode {
    DataParser,
    QuestionGenerator,
    FaqPageBuilder,
    ProductPageBuilder,
    ComparisonPageBuilder,
    DagMetadataWriter,
    OutputWriter,
}

impl PipelineNode {
    pub const EXECUTION_ORDER: [PipelineNode; 7] = [
        PipelineNode::DataParser,
        PipelineNode::QuestionGenerator,
        PipelineNode::FaqPageBuilder,
        PipelineNode::ProductPageBuilder,
        PipelineNode::ComparisonPageBuilder,
        PipelineNode::DagMetadataWriter,
        PipelineNode::OutputWriter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PipelineNode::DataParser => "data_parser",
            PipelineNode::QuestionGenerator => "question_generator",
            PipelineNode::FaqPageBuilder => "faq_page_builder",
            PipelineNode::ProductPageBuilder => "product_page_builder",
            PipelineNode::ComparisonPageBuilder => "comparison_page_builder",
            PipelineNode::DagMetadataWriter => "dag_metadata_writer",
            PipelineNode::OutputWriter => "output_writer",
        }
    }

    pub fn depends_on(self) -> &'static [PipelineNode] {
        use PipelineNode::*;
        match self {
            DataParser => &[],
            QuestionGenerator => &[DataParser],
            FaqPageBuilder => &[QuestionGenerator],
            ProductPageBuilder | ComparisonPageBuilder => &[DataParser],
            DagMetadataWriter => &[FaqPageBuilder, ProductPageBuilder, ComparisonPageBuilder],
            OutputWriter => &[DagMetadataWriter],
        }
    }

    /// Template a page-builder node renders
    fn template_key(self) -> Option<&'static str> {
        match self {
            PipelineNode::FaqPageBuilder => Some("faq"),
            PipelineNode::ProductPageBuilder => Some("product_page"),
            PipelineNode::ComparisonPageBuilder => Some("comparison_page"),
            _ => None,
        }
    }
}

/// Shape of the pipeline as written to `dag_metadata.json` (keys sorted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DagMetadata {
    pub execution_order: Vec<&'static str>,
    pub framework: &'static str,
    pub nodes: Vec<DagNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DagNode {
    pub depends_on: Vec<&'static str>,
    pub name: &'static str,
}

impl DagMetadata {
    pub fn describe() -> Self {
        let order = PipelineNode::EXECUTION_ORDER;
        Self {
            execution_order: order.iter().map(|node| node.name()).collect(),
            framework: PIPELINE_FRAMEWORK,
            nodes: order
                .iter()
                .map(|node| DagNode {
                    depends_on: node.depends_on().iter().map(|dep| dep.name()).collect(),
                    name: node.name(),
                })
                .collect(),
        }
    }
}

/// Where the product record comes from
#[derive(Debug, Clone)]
pub enum ProductSource {
    /// Loose record parsed with defaults for missing fields
    Raw(Value),
    /// Already-resolved product, e.g. from a dataset lookup
    Parsed(Product),
}

/// Every page the pipeline produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSet {
    pub faq: Page,
    pub product_page: Page,
    pub comparison_page: Page,
    pub dag_metadata: DagMetadata,
}

/// Files written by [`PageSet::write_to`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub faq: PathBuf,
    pub product_page: PathBuf,
    pub comparison_page: PathBuf,
    pub dag_metadata: PathBuf,
}

impl OutputPaths {
    pub fn under(output_dir: &Path) -> Self {
        Self {
            faq: output_dir.join("faq.json"),
            product_page: output_dir.join("product_page.json"),
            comparison_page: output_dir.join("comparison_page.json"),
            dag_metadata: output_dir.join("dag_metadata.json"),
        }
    }

    pub fn all(&self) -> [&Path; 4] {
        [&self.faq, &self.product_page, &self.comparison_page, &self.dag_metadata]
    }
}

impl PageSet {
    /// Write each page as pretty JSON, creating the directory first
    pub async fn write_to(&self, output_dir: &Path) -> ProducerResult<OutputPaths> {
        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|source| output_error(output_dir, source))?;

        let paths = OutputPaths::under(output_dir);
        write_json(&paths.faq, &self.faq).await?;
        write_json(&paths.product_page, &self.product_page).await?;
        write_json(&paths.comparison_page, &self.comparison_page).await?;
        write_json(&paths.dag_metadata, &self.dag_metadata).await?;
        Ok(paths)
    }
}

fn output_error(path: &Path, source: std::io::Error) -> ProducerError {
    ProducerError::OutputError {
        path: path.display().to_string(),
        source,
    }
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> ProducerResult<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| output_error(path, e.into()))?;
    tokio::fs::write(path, text).await.map_err(|source| output_error(path, source))
}

/// Runs the page DAG over a template registry
pub struct PagePipeline {
    registry: TemplateRegistry,
    rival: Product,
}

impl Default for PagePipeline {
    fn default() -> Self {
        Self::new(TemplateRegistry::standard())
    }
}

impl PagePipeline {
    pub fn new(registry: TemplateRegistry) -> Self {
        Self {
            registry,
            rival: Product::fictional_rival(),
        }
    }

    /// Compare against `rival` instead of the fictional product
    pub fn with_rival(mut self, rival: Product) -> Self {
        self.rival = rival;
        self
    }

    /// Run every node except `output_writer`
    pub fn run(&self, source: ProductSource) -> ProducerResult<PageSet> {
        let mut source = Some(source);
        let mut inputs = PageInputs::default();
        let mut faq = None;
        let mut product_page = None;
        let mut comparison_page = None;
        let mut dag_metadata = None;
        let mut finished: Vec<PipelineNode> = Vec::new();

        for node in PipelineNode::EXECUTION_ORDER {
            if node == PipelineNode::OutputWriter {
                break;
            }
            if let Some(missing) = node.depends_on().iter().find(|dep| !finished.contains(*dep)) {
                return Err(ProducerError::validation(format!(
                    "{} ran before {}",
                    node.name(),
                    missing.name()
                )));
            }

            let started = Instant::now();
            match node {
                PipelineNode::DataParser => {
                    inputs.product = Some(match source.take() {
                        Some(ProductSource::Raw(raw)) => Product::parse(&raw),
                        Some(ProductSource::Parsed(product)) => product,
                        None => return Err(ProducerError::validation("data_parser has no product source")),
                    });
                }
                PipelineNode::QuestionGenerator => {
                    let product = inputs
                        .product
                        .as_ref()
                        .ok_or_else(|| ProducerError::validation("question_generator needs a parsed product"))?;
                    inputs.questions = Some(generate_questions(product)?);
                }
                PipelineNode::FaqPageBuilder => faq = Some(self.render(node, &inputs)?),
                PipelineNode::ProductPageBuilder => product_page = Some(self.render(node, &inputs)?),
                PipelineNode::ComparisonPageBuilder => {
                    inputs.rival = Some(self.rival.clone());
                    comparison_page = Some(self.render(node, &inputs)?);
                }
                PipelineNode::DagMetadataWriter => dag_metadata = Some(DagMetadata::describe()),
                PipelineNode::OutputWriter => {}
            }
            process_debug!(
                ProcessId::current(),
                "Pipeline node {} finished in {}µs",
                node.name(),
                started.elapsed().as_micros()
            );
            finished.push(node);
        }

        let missing = |what: &str| ProducerError::validation(format!("missing {what} in pipeline state"));
        Ok(PageSet {
            faq: faq.ok_or_else(|| missing("faq"))?,
            product_page: product_page.ok_or_else(|| missing("product_page"))?,
            comparison_page: comparison_page.ok_or_else(|| missing("comparison_page"))?,
            dag_metadata: dag_metadata.ok_or_else(|| missing("dag_metadata"))?,
        })
    }

    fn render(&self, node: PipelineNode, inputs: &PageInputs) -> ProducerResult<Page> {
        let key = node
            .template_key()
            .ok_or_else(|| ProducerError::validation(format!("{} renders no page", node.name())))?;
        self.registry.render(key, inputs)
    }
}
