//! End-to-end generation passes against on-disk fixtures.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use solidus::{GenerateError, Generator, GeneratorConfig};
use tempfile::tempdir;

/// Trimmed-down version of what TanStack Router writes: every path shows up
/// once in an `update()` call and again in the interface block, the index
/// route is `/`, and unrelated labels carry path-shaped values.
const ROUTE_TREE: &str = r#"/* eslint-disable */

// @ts-nocheck

// This file was automatically generated and should not be edited.

import { Route as rootRoute } from './routes/__root'
import { Route as IndexImport } from './routes/index'
import { Route as UsersImport } from './routes/users'
import { Route as UsersUserIdImport } from './routes/users.$userId'

const IndexRoute = IndexImport.update({
  id: '/',
  path: '/',
  getParentRoute: () => rootRoute,
} as any)

const UsersRoute = UsersImport.update({
  id: '/users',
  path: '/users',
  getParentRoute: () => rootRoute,
} as any)

const UsersUserIdRoute = UsersUserIdImport.update({
  id: '/users/$userId',
  path: '/users/$userId',
  getParentRoute: () => rootRoute,
} as any)

declare module '@tanstack/react-router' {
  interface FileRoutesByPath {
    '/users': {
      id: '/users'
      path: '/users'
      fullPath: '/users'
      preLoaderRoute: typeof UsersImport
      parentRoute: typeof rootRoute
    }
    '/users/$userId': {
      id: '/users/$userId'
      path: '/users/$userId'
      fullPath: '/users/$userId'
      preLoaderRoute: typeof UsersUserIdImport
      parentRoute: typeof rootRoute
    }
  }
}
"#;

fn config_for(dir: &Path) -> GeneratorConfig {
    GeneratorConfig {
        input: dir.join("routeTree.gen.ts"),
        output: dir.join("routePaths.gen.ts"),
        class_name: "RoutePaths".to_string(),
    }
}

#[test]
fn test_pass_writes_accessor_module() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("routeTree.gen.ts"), ROUTE_TREE).unwrap();

    let generator = Generator::new(config_for(dir.path()));
    let report = generator.run_pass().unwrap();

    assert_eq!(report.routes, 2);
    assert!(report.rejected.is_empty());

    let module = fs::read_to_string(dir.path().join("routePaths.gen.ts")).unwrap();
    assert!(module.contains("export class RoutePaths {"));
    assert!(module.contains("static users(): string"));
    assert!(module.contains("return '/users';"));
    assert!(module.contains("static usersByUserId(userId: string | number): string"));
    assert!(module.contains("return `/users/${userId}`;"));
    assert!(module.contains("export const paths = RoutePaths;"));
    // The `/` index route must not surface as an accessor.
    assert!(!module.contains("static root"));
}

#[test]
fn test_missing_input_reported_and_output_untouched() {
    let dir = tempdir().unwrap();
    let previous = "// previously generated\n";
    fs::write(dir.path().join("routePaths.gen.ts"), previous).unwrap();

    let generator = Generator::new(config_for(dir.path()));
    let err = generator.run_pass().unwrap_err();

    assert!(matches!(err, GenerateError::InputMissing { .. }));
    let kept = fs::read_to_string(dir.path().join("routePaths.gen.ts")).unwrap();
    assert_eq!(kept, previous);
}

#[test]
fn test_reruns_are_byte_identical() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("routeTree.gen.ts"), ROUTE_TREE).unwrap();
    let generator = Generator::new(config_for(dir.path()));

    generator.run_pass().unwrap();
    let first = fs::read_to_string(dir.path().join("routePaths.gen.ts")).unwrap();
    generator.run_pass().unwrap();
    let second = fs::read_to_string(dir.path().join("routePaths.gen.ts")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_changed_input_fully_replaces_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("routeTree.gen.ts"), ROUTE_TREE).unwrap();
    let generator = Generator::new(config_for(dir.path()));
    generator.run_pass().unwrap();

    fs::write(dir.path().join("routeTree.gen.ts"), "path: '/about'").unwrap();
    let report = generator.run_pass().unwrap();

    assert_eq!(report.routes, 1);
    let module = fs::read_to_string(dir.path().join("routePaths.gen.ts")).unwrap();
    assert!(module.contains("static about(): string"));
    assert!(!module.contains("usersByUserId"));
}

#[test]
fn test_invalid_candidates_do_not_abort_the_pass() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("routeTree.gen.ts"),
        "path: '/2024/$slug'\npath: '/ok'\n",
    )
    .unwrap();

    let generator = Generator::new(config_for(dir.path()));
    let report = generator.run_pass().unwrap();

    assert_eq!(report.routes, 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].source_path, "/2024/$slug");
    assert!(matches!(
        report.rejected[0].reason,
        GenerateError::InvalidSegment { .. }
    ));

    let module = fs::read_to_string(dir.path().join("routePaths.gen.ts")).unwrap();
    assert!(module.contains("static ok(): string"));
}

#[test]
fn test_output_directory_created_when_missing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("routeTree.gen.ts"), "path: '/users'").unwrap();

    let config = GeneratorConfig {
        input: dir.path().join("routeTree.gen.ts"),
        output: dir.path().join("generated/paths/routePaths.gen.ts"),
        class_name: "RoutePaths".to_string(),
    };
    Generator::new(config).run_pass().unwrap();

    let module =
        fs::read_to_string(dir.path().join("generated/paths/routePaths.gen.ts")).unwrap();
    assert!(module.contains("static users(): string"));
}

#[test]
fn test_custom_class_name_flows_through() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("routeTree.gen.ts"), "path: '/users'").unwrap();

    let config = GeneratorConfig {
        class_name: "AppRoutes".to_string(),
        ..config_for(dir.path())
    };
    Generator::new(config).run_pass().unwrap();

    let module = fs::read_to_string(dir.path().join("routePaths.gen.ts")).unwrap();
    assert!(module.contains("export class AppRoutes {"));
    assert!(module.contains("export const paths = AppRoutes;"));
}
