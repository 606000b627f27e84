/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! A program for turning [Microsoft OpenAPI
//! metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml)
//! into Rust models.

use proc_macro2::TokenStream;
use quote::quote;
use std::{env, fs, io::Write, path::Path};

mod extract;
mod naming;
mod openapi;
mod oxidize;

use crate::extract::schema::{Extracted, extract_from_schema};
use crate::naming::{simple_name, snakeify};
use crate::openapi::{Metadata, load_metadata};
use crate::oxidize::{Registry, enums::GraphEnum, types::GraphType};

/// The Graph types and enums to generate, in generation order. Subtypes of a
/// hierarchy are listed after their base.
const SUPPORTED_TYPES: [&str; 47] = [
    "entity",
    "directoryObject",
    "user",
    "assignedLicense",
    "mailboxSettings",
    "mailFolder",
    "outlookItem",
    "message",
    "itemBody",
    "recipient",
    "emailAddress",
    "BaseCollectionPaginationCountResponse",
    "mailFolderCollectionResponse",
    "domainDnsRecordCollectionResponse",
    "deviceCompliancePolicyCollectionResponse",
    "domainDnsRecord",
    "domainDnsCnameRecord",
    "domainDnsMxRecord",
    "domainDnsSrvRecord",
    "domainDnsTxtRecord",
    "domainDnsUnavailableRecord",
    "deviceCompliancePolicy",
    "androidCompliancePolicy",
    "iosCompliancePolicy",
    "macOSCompliancePolicy",
    "windows10CompliancePolicy",
    "operatingSystemVersionRange",
    "deviceCompliancePolicyAssignment",
    "deviceComplianceScheduledActionForRule",
    "deviceComplianceActionItem",
    "deviceAndAppManagementAssignmentTarget",
    "allDevicesAssignmentTarget",
    "allLicensedUsersAssignmentTarget",
    "groupAssignmentTarget",
    "exclusionGroupAssignmentTarget",
    "configurationManagerCollectionAssignmentTarget",
    "virtualEventRegistrationQuestionBase",
    "virtualEventRegistrationCustomQuestion",
    "virtualEventRegistrationPredefinedQuestion",
    "bodyType",
    "importance",
    "deviceThreatProtectionLevel",
    "requiredPasswordType",
    "androidRequiredPasswordType",
    "deviceComplianceActionType",
    "virtualEventRegistrationQuestionAnswerInputType",
    "virtualEventRegistrationPredefinedQuestionLabel",
];

const FILE_LEDE: &str = r#"/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN
"#;

const GENERATION_DISCLOSURE: &str = "Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`.";

const GRAPH_PREFIX: &str = "microsoft.graph.";

fn print_usage(this_program: &str) {
    println!("Usage: {this_program} <openapi.yaml> <ms_graph_model_path>");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        let this_program = args
            .first()
            .map(String::as_str)
            .unwrap_or("ms_graph_model_extract");
        print_usage(this_program);
        std::process::exit(1);
    }

    let yaml_path = Path::new(&args[1]);
    let out_path = Path::new(&args[2]);
    let types_path = out_path.join("src/types/");

    let yaml = fs::read_to_string(yaml_path)?;
    println!("read {}", yaml_path.display());
    let Metadata { schemas } = load_metadata(&yaml)?;

    let mut extracted = vec![];
    for simple in SUPPORTED_TYPES {
        // Most types live under the Graph namespace, a few (like the
        // pagination base) at the top level.
        let full_name = format!("{GRAPH_PREFIX}{simple}");
        let Some((full_name, schema)) = schemas
            .get_key_value(&full_name)
            .or_else(|| schemas.get_key_value(simple))
        else {
            println!("no schema found for {simple}, skipping");
            continue;
        };
        assert_eq!(simple_name(full_name), simple);
        println!("extracting {full_name}");
        extracted.push(extract_from_schema(simple, schema));
    }

    let registry = Registry::new(&extracted);
    let mut modules = vec![];
    for item in &extracted {
        let name = item.name();
        println!("generating Rust type for {name}");
        let generated = match item {
            Extracted::Object(object) => {
                let graph_type = GraphType::new(object, &registry);
                quote!(#graph_type)
            }
            Extracted::Enum(graph_enum) => {
                let graph_enum = GraphEnum::new(graph_enum);
                quote!(#graph_enum)
            }
        };
        write_type_file(&types_path, name, generated)?;
        modules.push(snakeify(name));
    }
    modules.sort();
    write_module_file(&types_path, &modules)?;
    println!("Run rustfmt over {} before committing.", types_path.display());

    Ok(())
}

fn write_type_file(
    types_path: &Path,
    name: &str,
    generated: TokenStream,
) -> Result<(), Box<dyn std::error::Error>> {
    let filename = format!("{}.rs", snakeify(name));
    let destination = types_path.join(filename);
    let mut file = fs::File::create(&destination)?;

    write!(file, "{FILE_LEDE}\n{generated}")?;
    println!(
        "Wrote generated Rust types to {}\n",
        destination.to_string_lossy()
    );
    Ok(())
}

fn write_module_file(
    out_path: &Path,
    modules: &[impl AsRef<str>],
) -> Result<(), Box<dyn std::error::Error>> {
    let module_path = out_path.join("mod.rs");
    let mut module_file = fs::File::create(&module_path)?;
    writeln!(module_file, "{FILE_LEDE}")?;
    for module in modules {
        writeln!(module_file, "pub mod {};", module.as_ref())?;
    }
    println!("Wrote module out to {}\n", module_path.to_string_lossy());
    Ok(())
}
