//! One reconciliation run, start to finish
//!
//! Detect → Reconcile → Evaluate → {NoOp | Backup → Write} → Report.
//! Any failure ends the run immediately; nothing is retried.

use recon_content::unified_diff;
use recon_fs::compute_md5sum;

use crate::Result;
use crate::detect::detect;
use crate::evaluate::evaluate;
use crate::outcome::Outcome;
use crate::persist::persist;
use crate::reconcile::reconcile;
use crate::request::ReconcileRequest;

/// Execute `request` and report the outcome.
pub fn run(request: &ReconcileRequest) -> Result<Outcome> {
    let path = &request.path;
    tracing::debug!(%path, state = %request.state, "Starting reconciliation");

    let detected = detect(path)?;
    let format = detected.output_format(path, request.format_hint)?;

    let candidate = reconcile(
        &detected.mapping,
        request.state,
        &request.desired,
        &request.removal,
    );

    let evaluation = evaluate(path, detected.original_text(), &candidate, format)?;

    let diff = if request.options.diff && evaluation.changed {
        unified_diff(detected.original_text(), &evaluation.final_text)
    } else {
        None
    };

    let backup_file = if !evaluation.changed {
        tracing::debug!(%path, "Content unchanged, nothing to write");
        None
    } else if request.options.dry_run {
        tracing::info!(%path, "Dry run, leaving file untouched");
        None
    } else {
        persist(
            path,
            &evaluation.final_text,
            request.options.backup,
            request.options.create_dirs,
        )?
    };

    Ok(Outcome {
        file_path: path.to_string(),
        changed: evaluation.changed,
        md5sum: compute_md5sum(detected.original_text()),
        backup_file: backup_file.map(|p| p.to_string()),
        format,
        state: request.state,
        dry_run: request.options.dry_run,
        diff,
        final_text: evaluation.final_text,
    })
}
