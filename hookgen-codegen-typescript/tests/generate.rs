//! End-to-end generation into a temporary directory.

use std::fs;

use hookgen_codegen_typescript::{ApiGenerator, Generator, HooksGenerator, Settings, TypesGenerator};
use hookgen_ir::{ArgType, ArgumentDescriptor, FunctionDescriptor, FunctionKind, Namespace, TableDescriptor};
use tempfile::TempDir;

fn function(namespace: &str, name: &str, kind: FunctionKind) -> FunctionDescriptor {
    FunctionDescriptor::new(name, kind, Namespace::new(namespace), format!("{namespace}.ts"))
}

fn issue_functions() -> Vec<FunctionDescriptor> {
    let mut get = function("issues/queries", "get", FunctionKind::Query);
    get.arguments
        .push(ArgumentDescriptor::new("issueId", ArgType::Id("issues".into())));

    vec![
        get,
        function("issues/queries", "list", FunctionKind::Query),
        function("issues/mutations", "create", FunctionKind::Mutation),
    ]
}

#[test]
fn test_hooks_file_content() {
    let temp = TempDir::new().unwrap();
    let functions = issue_functions();
    let settings = Settings::default();

    HooksGenerator::new(&functions, &settings)
        .generate(temp.path())
        .unwrap();

    let content = fs::read_to_string(temp.path().join("queries/issues.ts")).unwrap();
    insta::assert_snapshot!(content, @r#"
    // This file is generated by hookgen. Do not edit it by hand.

    import { useQuery } from "convex/react";
    import { api } from "@/convex/_generated/api";
    import type { Id } from "@/convex/_generated/dataModel";

    // issues/queries
    export const useGet = (issueId: Id<"issues"> | null | undefined) =>
      useQuery(api.issues.queries.get, issueId ? { issueId } : "skip");

    export const useList = (shouldSkip?: boolean) =>
      useQuery(api.issues.queries.list, shouldSkip ? "skip" : {});
    "#);

    let index = fs::read_to_string(temp.path().join("index.ts")).unwrap();
    assert!(index.contains("export * from \"./queries/issues\";\nexport * from \"./mutations/issues\";\n"));
}

#[test]
fn test_regeneration_removes_stale_files() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default();
    let mut functions = issue_functions();
    functions.push(function("users", "sync", FunctionKind::Action));

    let first = HooksGenerator::new(&functions, &settings)
        .generate(temp.path())
        .unwrap();
    assert!(first.removed.is_empty());
    assert!(temp.path().join("actions/users.ts").exists());

    fs::write(temp.path().join("README.md"), "notes").unwrap();
    functions.pop();

    let second = HooksGenerator::new(&functions, &settings)
        .generate(temp.path())
        .unwrap();
    assert_eq!(second.removed, vec!["actions/users.ts"]);
    assert!(!temp.path().join("actions/users.ts").exists());
    assert!(temp.path().join("README.md").exists());

    // Same input, same bytes.
    let before = fs::read_to_string(temp.path().join("queries/issues.ts")).unwrap();
    let third = HooksGenerator::new(&functions, &settings)
        .generate(temp.path())
        .unwrap();
    let after = fs::read_to_string(temp.path().join("queries/issues.ts")).unwrap();
    assert_eq!(before, after);
    assert!(third.removed.is_empty());
}

#[test]
fn test_api_and_types_share_nothing() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default();
    let functions = issue_functions();
    let tables = vec![TableDescriptor {
        name: "issues".to_string(),
        type_name: "Issues".to_string(),
        domain: "main".to_string(),
    }];

    let api = ApiGenerator::new(&functions, &settings)
        .generate(&temp.path().join("api"))
        .unwrap();
    let types = TypesGenerator::new(&tables, &settings)
        .generate(&temp.path().join("types"))
        .unwrap();

    assert_eq!(api.written, vec!["issues.ts", "index.ts"]);
    assert_eq!(types.written, vec!["tables.ts", "index.ts"]);
    assert!(api.warnings.is_empty());

    let content = fs::read_to_string(temp.path().join("api/issues.ts")).unwrap();
    insta::assert_snapshot!(content, @r#"
    // This file is generated by hookgen. Do not edit it by hand.

    import { api } from "@/convex/_generated/api";
    import type { FunctionReference } from "convex/server";

    export const issuesQueries = {
      // issues/queries
      get: api.issues.queries.get as FunctionReference<"query">,
      list: api.issues.queries.list as FunctionReference<"query">,
    } as const;

    export const issuesMutations = {
      // issues/mutations
      create: api.issues.mutations.create as FunctionReference<"mutation">,
    } as const;
    "#);
}
