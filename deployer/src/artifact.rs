// deployer/src/artifact.rs

use crate::bindings::DEEZNUTS_ABI;
use crate::errors::Error;
use crate::CONTRACT_NAME;
use ethers::{abi::Abi, types::Bytes};
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{debug, info};

/// Compiled contract ready to hand to a `ContractFactory`.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

// Hardhat writes `bytecode` as a hex string, Foundry as `{ "object": "0x.." }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BytecodeField {
    Hex(String),
    Object { object: String },
}

impl BytecodeField {
    fn as_hex(&self) -> &str {
        match self {
            BytecodeField::Hex(s) => s,
            BytecodeField::Object { object } => object,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerArtifact {
    contract_name: Option<String>,
    abi: Abi,
    bytecode: BytecodeField,
}

impl Artifact {
    /// Loads a `.json` compiler artifact, or a raw hex bytecode file paired
    /// with the built-in ABI for anything else.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        info!("Loading contract artifact from {:?}", path_ref);
        let raw = fs::read_to_string(path_ref)
            .wrap_err_with(|| format!("Failed to read artifact file: {:?}", path_ref))?;

        let is_json = path_ref
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let artifact = if is_json {
            Self::from_json(&raw).wrap_err_with(|| format!("Failed to parse artifact JSON: {:?}", path_ref))?
        } else {
            Self::from_bytecode_hex(&raw).wrap_err_with(|| format!("Failed to parse bytecode file: {:?}", path_ref))?
        };
        debug!(name = %artifact.contract_name, bytecode_len = artifact.bytecode.len(), "Artifact loaded");
        Ok(artifact)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: CompilerArtifact = serde_json::from_str(raw)?;
        let contract_name = parsed.contract_name.unwrap_or_else(|| CONTRACT_NAME.to_string());
        let bytecode = decode_bytecode(parsed.bytecode.as_hex(), &contract_name)?;
        Ok(Self { contract_name, abi: parsed.abi, bytecode })
    }

    pub fn from_bytecode_hex(raw: &str) -> Result<Self> {
        let bytecode = decode_bytecode(raw, CONTRACT_NAME)?;
        Ok(Self {
            contract_name: CONTRACT_NAME.to_string(),
            abi: DEEZNUTS_ABI.clone(),
            bytecode,
        })
    }
}

fn decode_bytecode(raw: &str, name: &str) -> Result<Bytes> {
    let cleaned = raw.trim().trim_start_matches("0x");
    if cleaned.is_empty() {
        return Err(Error::EmptyBytecode(name.to_string()).into());
    }
    let bytes = hex::decode(cleaned).wrap_err("Failed to decode hex bytecode")?;
    Ok(Bytes::from(bytes))
}

// END OF FILE: deployer/src/artifact.rs
