use std::io::{self, Read};

use anyhow::Context;
use docpatch::json_cli::{
    decode_document, encode_document, load_ops_file, lookup_path, patch_document, run_job,
    JobOutcome, PatchJob,
};
use docpatch::json_patch::{ApplyPatchOptions, PatchError};
use serde_json::Value;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Apply(args) => cmd_apply(args),
        Command::File(args) => cmd_file(args),
        Command::Job(args) => cmd_job(args),
        Command::Get(args) => cmd_get(args),
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("reading document from stdin")?;
    Ok(buf)
}

fn load_ops(args: &OpsArgs) -> anyhow::Result<Value> {
    match (&args.ops, &args.ops_file) {
        (Some(text), _) => Ok(decode_document(text).context("parsing --ops")?),
        (None, Some(path)) => Ok(load_ops_file(path)?),
        (None, None) => anyhow::bail!("either --ops or --ops-file is required"),
    }
}

fn options(flags: &PatchFlags) -> ApplyPatchOptions {
    ApplyPatchOptions {
        strict_insert: flags.strict_insert,
        atomic: flags.atomic,
    }
}

fn print_outcome(outcome: &JobOutcome) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(outcome)?);
    Ok(())
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let ops = load_ops(&args.ops)?;
    let content = decode_document(&read_stdin()?)?;
    let doc = patch_document(content, &ops, &options(&args.flags))?;
    let out = match args.indent {
        Some(indent) => encode_document(&doc, indent)?,
        None => serde_json::to_string(&doc)?,
    };
    println!("{out}");
    Ok(())
}

fn cmd_file(args: FileArgs) -> anyhow::Result<()> {
    let ops = match load_ops(&args.ops)? {
        Value::Array(records) => records,
        _ => {
            return Err(PatchError::InvalidOperationList("operations must be a list".into()).into())
        }
    };
    let mut job = PatchJob::new(args.path);
    job.target = args.target;
    job.ops = ops;
    job.indent = args.indent;
    job.force = args.force;
    job.check = args.check;
    job.strict_insert = args.flags.strict_insert;
    job.atomic = args.flags.atomic;
    print_outcome(&run_job(&job)?)
}

fn cmd_job(args: JobArgs) -> anyhow::Result<()> {
    let mut job = PatchJob::load(&args.job)?;
    job.check |= args.check;
    let outcome = run_job(&job).with_context(|| format!("job {}", args.job.display()))?;
    print_outcome(&outcome)
}

fn cmd_get(args: GetArgs) -> anyhow::Result<()> {
    println!("{}", lookup_path(&read_stdin()?, &args.path)?);
    Ok(())
}
