use std::{env, fs, io, path::PathBuf};

const PROTO_DIR: &str = "protos";
const PROTOS: &[&str] = &["protos/dota_gcmessages_common_bot_script.proto"];

fn main() -> io::Result<()> {
	println!("cargo:rerun-if-changed={}", PROTO_DIR);

	let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or_else(|| io::Error::other("OUT_DIR not set"))?);
	protobuf_codegen_pure::Codegen::new()
		.out_dir(&out_dir)
		.inputs(PROTOS)
		.include(PROTO_DIR)
		.run()?;

	// Generated files start with inner attributes and docs, which `include!` rejects.
	for proto in PROTOS {
		let name = PathBuf::from(proto).with_extension("rs");
		let path = out_dir.join(name.file_name().ok_or_else(|| io::Error::other("bad proto path"))?);
		let source = fs::read_to_string(&path)?;
		let stripped: String = source
			.lines()
			.filter(|line| !is_inner_attribute(line))
			.flat_map(|line| [line, "\n"])
			.collect();
		fs::write(&path, stripped)?;
	}
	Ok(())
}

fn is_inner_attribute(line: &str) -> bool {
	let line = line.trim_start();
	line.starts_with("#![") || line.starts_with("//!")
}
