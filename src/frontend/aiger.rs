use crate::aig::{Aig, AigAnd, AigLatch, AigLit};
use ::aig::AigEdge;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    panic::{self, AssertUnwindSafe},
    path::Path,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AigerError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: invalid aiger header")]
    InvalidHeader { path: String },
    #[error("{path}: maximum variable index {max_var} exceeds I + L + A = {used}")]
    UnusedVariables { path: String, max_var: u64, used: u64 },
    #[error("{path}: not a valid aiger model")]
    Read { path: String },
    #[error("{path}: latch {lit} has reset {reset}, expected 0, 1 or {lit}")]
    InvalidReset { path: String, lit: u32, reset: u32 },
}

type Result<T> = std::result::Result<T, AigerError>;

/// The node table of the reader holds exactly `I + L + A + 1` entries, so
/// models whose maximum variable index leaves variables unused are refused
/// before they reach it.
fn check_header(path: &Path) -> Result<()> {
    let name = || path.display().to_string();
    let file = File::open(path).map_err(|source| AigerError::Io {
        path: name(),
        source,
    })?;
    let mut header = String::new();
    BufReader::new(file)
        .read_line(&mut header)
        .map_err(|source| AigerError::Io {
            path: name(),
            source,
        })?;
    let mut fields = header.split_ascii_whitespace();
    let counts: Option<Vec<u64>> = match fields.next() {
        Some("aag" | "aig") => fields.map(|t| t.parse().ok()).collect(),
        _ => None,
    };
    let Some(counts) = counts.filter(|c| c.len() >= 5) else {
        return Err(AigerError::InvalidHeader { path: name() });
    };
    let used = counts[1] + counts[2] + counts[4];
    if counts[0] > used {
        return Err(AigerError::UnusedVariables {
            path: name(),
            max_var: counts[0],
            used,
        });
    }
    Ok(())
}

#[inline]
fn edge_lit(e: AigEdge) -> AigLit {
    AigLit::from_var(e.node_id() as u32, e.compl())
}

#[inline]
fn node_lit(id: usize) -> AigLit {
    AigLit::from_var(id as u32, false)
}

impl Aig {
    /// Takes over a model loaded by the aiger library. Node ids are aiger
    /// variables, and a latch without init is one whose reset is itself.
    pub fn from_aig(aig: &::aig::Aig) -> Self {
        let mut res = Aig::new(aig.num_nodes() as u32 - 1);
        res.inputs = aig.inputs.iter().map(|i| node_lit(*i)).collect();
        res.latchs = aig
            .latchs
            .iter()
            .map(|l| {
                let lit = node_lit(l.input);
                AigLatch::new(lit, edge_lit(l.next), l.init.map_or(lit, edge_lit))
            })
            .collect();
        res.outputs = aig.outputs.iter().map(|e| edge_lit(*e)).collect();
        res.bads = aig.bads.iter().map(|e| edge_lit(*e)).collect();
        res.constraints = aig.constraints.iter().map(|e| edge_lit(*e)).collect();
        res.justice = aig
            .justice
            .iter()
            .map(|j| j.iter().map(|e| edge_lit(*e)).collect())
            .collect();
        res.fairness = aig.fairness.iter().map(|e| edge_lit(*e)).collect();
        for node in aig.ands_iter() {
            let (rhs0, rhs1) = node.fanin();
            res.add_and(AigAnd::new(
                node_lit(node.node_id()),
                edge_lit(rhs0),
                edge_lit(rhs1),
            ));
        }
        res
    }

    /// Reads an ascii (`aag`) or binary (`aig`) model.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        check_header(path)?;
        let aig = panic::catch_unwind(AssertUnwindSafe(|| ::aig::Aig::from_file(path)))
            .map_err(|_| AigerError::Read {
                path: path.display().to_string(),
            })?;
        let res = Self::from_aig(&aig);
        // the library keeps any reset literal
        if let Some(l) = res
            .latchs
            .iter()
            .find(|l| !l.reset.is_constant() && l.reset != l.lit)
        {
            return Err(AigerError::InvalidReset {
                path: path.display().to_string(),
                lit: l.lit.raw(),
                reset: l.reset.raw(),
            });
        }
        Ok(res)
    }
}

/// model of an inline aiger text
#[cfg(test)]
pub(crate) fn from_text(text: &[u8]) -> Aig {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text).unwrap();
    Aig::from_file(file.path()).unwrap()
}
