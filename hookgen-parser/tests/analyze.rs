use std::{fs, path::Path};

use hookgen_config::Config;
use hookgen_ir::{ArgType, DeclarationStyle, FunctionKind};
use hookgen_parser::{ScanError, analyze};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn config_for(root: &Path, extra: &str) -> Config {
    let toml = format!(
        "[source]\nroot = \"convex\"\nschema = \"convex/schema\"\n{extra}"
    );
    Config::from_str_with_filename(&toml, "hookgen.toml", root).unwrap()
}

fn standard_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write(
        root,
        "convex/schema.ts",
        r#"
import { defineSchema, defineTable } from "convex/server";
import { v } from "convex/values";

export default defineSchema({
  users: defineTable({ name: v.string() }),
  issues: defineTable({ title: v.string(), projectId: v.id("projects") }),
  projects: defineTable({ name: v.string() }),
});
"#,
    );
    write(
        root,
        "convex/model/issues/validators.ts",
        r#"
export const listValidator = v.object({
  status: v.string(),
  paginationOpts: paginationOptsValidator,
});
"#,
    );
    write(
        root,
        "convex/issues/queries.ts",
        r#"
import { query } from "../_generated/server";

// export const legacy = query({ args: {} });

export const list = query({
  args: Issues.listValidator,
  handler: async (ctx, args) => ctx.db.query("issues").paginate(args.paginationOpts),
});

export const get = query({
  args: { issueId: v.id("issues"), projectId: v.optional(v.id("projects")) },
  handler: async (ctx, { issueId }) => ctx.db.get(issueId),
});
"#,
    );
    write(
        root,
        "convex/issues/mutations.ts",
        r#"
export const create = mutation({
  args: { title: v.string(), tagIds: v.optional(v.array(v.id("tags"))) },
  handler: async (ctx, args) => {
    return await ctx.db.insert("issues", args);
  },
});

export const purge = internalMutation({ args: {}, handler: async () => {} });
"#,
    );
    write(root, "convex/http.ts", "export const route = query({ args: {} });");
    write(root, "convex/_generated/api.d.ts", "export declare const api: any;");
    write(root, "convex/broken.ts", "export const x = query({ args: { ");

    temp
}

#[test]
fn analyzes_standard_project() {
    let temp = standard_project();
    let analysis = analyze(&config_for(temp.path(), "")).unwrap();

    let names: Vec<_> = analysis
        .functions
        .iter()
        .map(|f| (f.namespace.as_str(), f.name.as_str(), f.kind))
        .collect();
    assert_eq!(
        names,
        vec![
            ("issues/mutations", "create", FunctionKind::Mutation),
            ("issues/queries", "list", FunctionKind::Query),
            ("issues/queries", "get", FunctionKind::Query),
        ]
    );

    let list = &analysis.functions[1];
    assert!(list.is_paginated);
    assert_eq!(list.arguments.len(), 1);
    assert_eq!(list.arguments[0].name, "status");
    assert_eq!(list.arguments[0].ty, ArgType::String);

    let get = &analysis.functions[2];
    assert!(get.arguments[0].is_reference_id);
    assert!(get.arguments[1].optional);

    let tables: Vec<_> = analysis.tables.iter().map(|t| t.type_name.as_str()).collect();
    assert_eq!(tables, vec!["Users", "Issues", "Projects"]);

    assert_eq!(analysis.failed_files(), 1);
    assert!(
        analysis.diagnostics[0]
            .location
            .as_deref()
            .unwrap()
            .contains("broken.ts")
    );
}

#[test]
fn skip_patterns_exclude_files() {
    let temp = standard_project();
    let config = config_for(temp.path(), "skip_patterns = ['^broken\\.ts$']\n");
    let analysis = analyze(&config).unwrap();

    assert_eq!(analysis.failed_files(), 0);
    assert_eq!(analysis.functions.len(), 3);
}

#[test]
fn analyzes_fluent_project() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "convex/projects.ts",
        r#"
export const list = authedQuery
  .input({ ownerId: v.id("users"), archived: v.optional(v.boolean()) })
  .handler(async (ctx, args) => [])
  .public();

export const archive = convex
  .mutation()
  .input({ projectId: v.id("projects") })
  .handler(async () => {})
  .public();

export const reindex = adminAction.handler(async () => {}).internal();
"#,
    );

    let config = config_for(temp.path(), "convention = \"fluent\"\n");
    assert_eq!(config.convention, DeclarationStyle::Fluent);
    let analysis = analyze(&config).unwrap();

    let names: Vec<_> = analysis
        .functions
        .iter()
        .map(|f| (f.name.as_str(), f.kind))
        .collect();
    assert_eq!(
        names,
        vec![("list", FunctionKind::Query), ("archive", FunctionKind::Mutation)]
    );
    assert!(analysis.tables.is_empty());
}

#[test]
fn missing_root_is_fatal() {
    let temp = TempDir::new().unwrap();
    let err = analyze(&config_for(temp.path(), "")).unwrap_err();
    assert!(matches!(err, ScanError::RootNotFound(_)));
}
