use ripple_core::{BOAT_WGSL, MAX_RIPPLES, SURFACE_WGSL};

fn validate(name: &str, source: &str) -> naga::Module {
    let module = match naga::front::wgsl::parse_str(source) {
        Ok(module) => module,
        Err(e) => panic!("Failed to parse {}:\n{}", name, e.emit_to_string(source)),
    };
    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    if let Err(e) = validator.validate(&module) {
        panic!("Failed to validate {}:\n{:?}", name, e);
    }
    module
}

fn entry_points(module: &naga::Module) -> Vec<&str> {
    module.entry_points.iter().map(|ep| ep.name.as_str()).collect()
}

#[test]
fn surface_shader_validates() {
    let module = validate("surface.wgsl", SURFACE_WGSL);
    let eps = entry_points(&module);
    assert!(eps.contains(&"vs_surface"));
    assert!(eps.contains(&"fs_surface"));
}

#[test]
fn boat_shader_validates() {
    let module = validate("boat.wgsl", BOAT_WGSL);
    let eps = entry_points(&module);
    assert!(eps.contains(&"vs_boat"));
    assert!(eps.contains(&"fs_boat"));
}

#[test]
fn surface_shader_ripple_array_matches_store_capacity() {
    let decl = format!("array<vec4<f32>, {}>", MAX_RIPPLES);
    assert!(SURFACE_WGSL.contains(&decl));
    let loop_bound = format!("const MAX_RIPPLES: u32 = {}u;", MAX_RIPPLES);
    assert!(SURFACE_WGSL.contains(&loop_bound));
}

#[test]
fn surface_shader_uses_host_shading_weights() {
    assert!(SURFACE_WGSL.contains("vec3<f32>(0.5, 0.3, 1.0)"));
    assert!(SURFACE_WGSL.contains("pos.z * 10.0"));
}
