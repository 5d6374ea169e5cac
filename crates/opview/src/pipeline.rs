//! Generic render pipeline.
//!
//! One driver runs every command: assemble → decode → classify → derive
//! schema / style rows → compose. Command-specific behavior lives entirely
//! in a `CommandSpec` descriptor (discriminator probes, schema choice,
//! style-rule tables, title functions) — configuration data, not copied
//! control flow.
//!
//! The driver is synchronous, pure, and infallible: every failure class
//! (task error, decode failure, shape mismatch) maps to one of the two
//! output forms. It never returns `Result` and never panics.

use tracing::debug;

use crate::assemble::{assemble, Assembled, NO_RESPONSE_YET};
use crate::classify::{classify, Probe};
use crate::compose::{build_block, extract_rows, RowSource, TitleCtx, TitleFn};
use crate::decode::{decode, DecodedPayload, Record};
use crate::render::RenderedOutput;
use crate::schema::Schema;
use crate::style::{PayloadStats, StyleRule};
use crate::task::TaskStatus;

/// Derives presentation fields from a raw record before schema derivation
/// (joined arrays, formatted handles, computed result labels).
pub type PrepareFn = fn(&Record) -> Record;

/// One table block of a variant.
pub struct BlockSpec {
    pub source: RowSource,
    pub prepare: Option<PrepareFn>,
    pub schema: Schema,
    pub styles: &'static [StyleRule],
    pub title: TitleFn,
    /// Optional blocks are silently skipped when their rows are missing or
    /// empty (trust lists, note blocks). Required blocks with no rows mean
    /// the payload semantically had no results.
    pub optional: bool,
}

impl BlockSpec {
    pub fn new(source: RowSource, schema: Schema, title: TitleFn) -> Self {
        Self {
            source,
            prepare: None,
            schema,
            styles: &[],
            title,
            optional: false,
        }
    }

    pub fn prepare(mut self, prepare: PrepareFn) -> Self {
        self.prepare = Some(prepare);
        self
    }

    pub fn styles(mut self, styles: &'static [StyleRule]) -> Self {
        self.styles = styles;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// One recognized payload shape of a command.
pub struct VariantSpec {
    pub tag: &'static str,
    pub probe: Probe,
    pub blocks: Vec<BlockSpec>,
}

impl VariantSpec {
    pub fn new(tag: &'static str, probe: Probe, blocks: Vec<BlockSpec>) -> Self {
        Self { tag, probe, blocks }
    }
}

/// Full rendering descriptor for one command.
pub struct CommandSpec {
    pub name: &'static str,
    /// Domain-specific message for an empty or semantically-absent result
    /// set ("No ARP entries found").
    pub empty_message: &'static str,
    pub variants: Vec<VariantSpec>,
}

/// Render one task result through a command descriptor.
///
/// The only entry point; always returns a renderable value.
pub fn render(spec: &CommandSpec, status: TaskStatus, fragments: &[String]) -> RenderedOutput {
    let buffer = match assemble(status, fragments) {
        Assembled::Failed(text) => return RenderedOutput::Plaintext(text),
        Assembled::Empty => return RenderedOutput::plaintext(NO_RESPONSE_YET),
        Assembled::Buffer(buffer) => buffer,
    };

    let payload = decode(&buffer);
    match &payload {
        DecodedPayload::Raw(text) => return RenderedOutput::plaintext(text.clone()),
        DecodedPayload::Records(records) if records.is_empty() => {
            return RenderedOutput::plaintext(spec.empty_message);
        }
        _ => {}
    }

    let probes: Vec<Probe> = spec.variants.iter().map(|variant| variant.probe).collect();
    let Some(index) = classify(&probes, &payload) else {
        debug!(command = spec.name, "no variant matched, passing payload through raw");
        return RenderedOutput::Plaintext(buffer);
    };
    let variant = &spec.variants[index];

    let object = match &payload {
        DecodedPayload::Object(object) => Some(object),
        _ => None,
    };

    let mut blocks = Vec::with_capacity(variant.blocks.len());
    for block in &variant.blocks {
        let records = match extract_rows(block.source, &payload) {
            Ok(records) => records,
            Err(err) if block.optional => {
                debug!(command = spec.name, variant = variant.tag, %err, "skipping optional block");
                continue;
            }
            Err(err) => {
                debug!(command = spec.name, variant = variant.tag, %err, "required block unavailable");
                return RenderedOutput::plaintext(spec.empty_message);
            }
        };
        if records.is_empty() {
            if block.optional {
                continue;
            }
            return RenderedOutput::plaintext(spec.empty_message);
        }

        let records: Vec<Record> = match block.prepare {
            Some(prepare) => records.iter().map(prepare).collect(),
            None => records,
        };
        let stats = PayloadStats::compute(&records);
        let title = (block.title)(&TitleCtx {
            rows: &records,
            object,
        });
        blocks.push(build_block(&block.schema, &records, block.styles, &stats, title));
    }

    if blocks.iter().all(|block| block.rows.is_empty()) {
        debug!(command = spec.name, "no rows in any block, passing payload through raw");
        return RenderedOutput::Plaintext(buffer);
    }
    RenderedOutput::Table(blocks)
}
