//! Generates constructors for an in-memory class and its imports.
//!
//! Run with: `cargo run --example generate`

use tsctor::prelude::*;

const USER: &str = r#"import { Role } from './role';
import { Address } from './address';

export class User {
  static registry: Map<string, User>;
  id!: number;
  name?: string;
  role?: Role;
  roles: Role[] = [];
  address?: Address;
  previous: Array<Address> = [];
  tags: string[] = [];

}
"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Unsaved buffers served from memory instead of disk
    let resolver = MemoryResolver::new()
        .with_file("/project/src/role.ts", "export enum Role { Admin = 'admin', Guest = 'guest' }")
        .with_file("/project/src/address.ts", "export class Address { street?: string; }");

    let inserter = ConstructorInserter::new(resolver);
    let document =
        Document::new("/project/src/user.ts", USER).with_config(EditorConfig::new(true, 2));
    let mut sink = TextBufferSink::new(document.text());

    match inserter
        .insert(&document, Position::line_start(12), &mut sink)
        .await?
    {
        Some(_) => println!("{}", sink.text()),
        None => println!("no class found"),
    }

    // Same generator, standalone and without import resolution
    let snippet = tsctor::generate_from_source(USER, &IndentationPolicy::tabs())?;
    if let Some(snippet) = snippet {
        println!("{snippet}");
    }

    Ok(())
}
