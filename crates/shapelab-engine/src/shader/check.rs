use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::{AddressSpace, Binding, Handle, Module, Scalar, Type, TypeInner, VectorSize};

use crate::render::DrawUniforms;

use super::error::{ShaderError, ShaderStage};
use super::program::ProgramStatus;
use super::source::{ProgramSource, FRAGMENT_ENTRY, VERTEX_ENTRY};

/// Size of the uniform block the draw layer binds at `@group(0) @binding(0)`.
const UNIFORM_BLOCK_SIZE: u32 = std::mem::size_of::<DrawUniforms>() as u32;

/// Compiles and links a program without touching the GPU.
///
/// Both stages are always compiled so that every compile error is reported,
/// not just the first. Linking only runs when both stages compiled.
pub fn check_program(source: &ProgramSource) -> ProgramStatus {
    let vertex = compile_stage(ShaderStage::Vertex, source.vertex());
    let fragment = compile_stage(ShaderStage::Fragment, source.fragment());

    let (vertex, fragment) = match (vertex, fragment) {
        (Ok(v), Ok(f)) => (v, f),
        (v, f) => {
            let errors = [v.err(), f.err()].into_iter().flatten().collect();
            return ProgramStatus::Failed(errors);
        }
    };

    let errors = link(&vertex, &fragment);
    if errors.is_empty() {
        ProgramStatus::Linked
    } else {
        ProgramStatus::Failed(errors)
    }
}

fn compile_stage(stage: ShaderStage, source: &str) -> Result<Module, ShaderError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| ShaderError::Compile {
        stage,
        message: e.emit_to_string(source),
    })?;

    Validator::new(ValidationFlags::all(), Capabilities::default())
        .validate(&module)
        .map_err(|e| ShaderError::Compile {
            stage,
            message: e.emit_to_string(source),
        })?;

    Ok(module)
}

// ── link ──────────────────────────────────────────────────────────────────

fn link(vertex: &Module, fragment: &Module) -> Vec<ShaderError> {
    let mut errors = Vec::new();

    check_resources(vertex, ShaderStage::Vertex, &mut errors);
    check_resources(fragment, ShaderStage::Fragment, &mut errors);

    let vs = find_entry(vertex, VERTEX_ENTRY, naga::ShaderStage::Vertex);
    let fs = find_entry(fragment, FRAGMENT_ENTRY, naga::ShaderStage::Fragment);

    if vs.is_none() {
        errors.push(ShaderError::link(format!(
            "vertex source has no `@vertex fn {VERTEX_ENTRY}`"
        )));
    }
    if fs.is_none() {
        errors.push(ShaderError::link(format!(
            "fragment source has no `@fragment fn {FRAGMENT_ENTRY}`"
        )));
    }
    let (Some(vs), Some(fs)) = (vs, fs) else {
        return errors;
    };

    // Vertex inputs: exactly the position buffer at location 0.
    let inputs = io_locations(vertex, vs.function.arguments.iter().map(|a| (a.ty, a.binding.as_ref())));
    match inputs.iter().find(|(loc, _)| *loc == 0) {
        Some((_, ty)) if is_vec3_f32(&vertex.types[*ty].inner) => {}
        Some(_) => errors.push(ShaderError::link("vertex input @location(0) must be vec3<f32>")),
        None => errors.push(ShaderError::link("vertex stage does not read @location(0)")),
    }
    for (loc, _) in inputs.iter().filter(|(loc, _)| *loc != 0) {
        errors.push(ShaderError::link(format!(
            "vertex input @location({loc}) has no buffer; only @location(0) is bound"
        )));
    }

    // Inter-stage: every fragment input must be written by the vertex stage.
    let outputs = io_locations(
        vertex,
        vs.function.result.iter().map(|r| (r.ty, r.binding.as_ref())),
    );
    let varyings = io_locations(fragment, fs.function.arguments.iter().map(|a| (a.ty, a.binding.as_ref())));
    for (loc, fty) in &varyings {
        match outputs.iter().find(|(out, _)| out == loc) {
            None => errors.push(ShaderError::link(format!(
                "fragment input @location({loc}) is not written by the vertex stage"
            ))),
            Some((_, vty)) if vertex.types[*vty].inner != fragment.types[*fty].inner => {
                errors.push(ShaderError::link(format!(
                    "@location({loc}) type differs between vertex output and fragment input"
                )))
            }
            Some(_) => {}
        }
    }

    // Single color target.
    let targets = io_locations(
        fragment,
        fs.function.result.iter().map(|r| (r.ty, r.binding.as_ref())),
    );
    match targets.iter().find(|(loc, _)| *loc == 0) {
        Some((_, ty)) if is_f32_color(&fragment.types[*ty].inner) => {}
        Some(_) => errors.push(ShaderError::link(
            "fragment output @location(0) must be f32 or a vector of f32 to match the color target",
        )),
        None => errors.push(ShaderError::link("fragment stage does not write @location(0)")),
    }

    errors
}

fn find_entry<'m>(
    module: &'m Module,
    name: &str,
    stage: naga::ShaderStage,
) -> Option<&'m naga::EntryPoint> {
    module
        .entry_points
        .iter()
        .find(|ep| ep.name == name && ep.stage == stage)
}

/// The only bindable resource is the draw uniform block.
fn check_resources(module: &Module, stage: ShaderStage, errors: &mut Vec<ShaderError>) {
    for (_, var) in module.global_variables.iter() {
        let Some(binding) = var.binding.as_ref() else {
            continue;
        };
        let name = var.name.as_deref().unwrap_or("<unnamed>");

        if binding.group != 0 || binding.binding != 0 {
            errors.push(ShaderError::link(format!(
                "{stage} resource `{name}` is at @group({}) @binding({}); only @group(0) @binding(0) is bound",
                binding.group, binding.binding
            )));
            continue;
        }
        if !matches!(var.space, AddressSpace::Uniform) {
            errors.push(ShaderError::link(format!(
                "{stage} resource `{name}` must be declared var<uniform>"
            )));
            continue;
        }
        let size = module.types[var.ty].inner.size(module.to_ctx());
        if size > UNIFORM_BLOCK_SIZE {
            errors.push(ShaderError::link(format!(
                "{stage} uniform `{name}` is {size} bytes; the bound block is {UNIFORM_BLOCK_SIZE}"
            )));
        }
    }
}

/// Flattens `@location` bindings from arguments/results, descending one level
/// into structs.
fn io_locations<'a>(
    module: &Module,
    items: impl Iterator<Item = (Handle<Type>, Option<&'a Binding>)>,
) -> Vec<(u32, Handle<Type>)> {
    let mut out = Vec::new();
    for (ty, binding) in items {
        match binding {
            Some(Binding::Location { location, .. }) => out.push((*location, ty)),
            Some(Binding::BuiltIn(_)) => {}
            None => {
                if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                    for member in members {
                        if let Some(Binding::Location { location, .. }) = member.binding.as_ref() {
                            out.push((*location, member.ty));
                        }
                    }
                }
            }
        }
    }
    out
}

fn is_f32_color(inner: &TypeInner) -> bool {
    match inner {
        TypeInner::Scalar(scalar) | TypeInner::Vector { scalar, .. } => *scalar == Scalar::F32,
        _ => false,
    }
}

fn is_vec3_f32(inner: &TypeInner) -> bool {
    matches!(
        inner,
        TypeInner::Vector { size, scalar } if *size == VectorSize::Tri && *scalar == Scalar::F32
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = r#"
@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position, 1.0);
}
"#;

    const FS_UNIFORM: &str = r#"
struct DrawUniforms {
    color: vec4<f32>,
    time: f32,
}

@group(0) @binding(0)
var<uniform> u: DrawUniforms;

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return u.color;
}
"#;

    const VS_VARYING: &str = r#"
struct VsOut {
    @builtin(position) clip: vec4<f32>,
    @location(0) ndc: vec2<f32>,
}

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VsOut {
    var out: VsOut;
    out.clip = vec4<f32>(position, 1.0);
    out.ndc = position.xy;
    return out;
}
"#;

    const FS_VARYING: &str = r#"
@fragment
fn fs_main(@location(0) ndc: vec2<f32>) -> @location(0) vec4<f32> {
    return vec4<f32>(ndc * 0.5 + 0.5, 0.0, 1.0);
}
"#;

    fn status(vs: &'static str, fs: &'static str) -> ProgramStatus {
        check_program(&ProgramSource::new("test", vs, fs))
    }

    fn errors(vs: &'static str, fs: &'static str) -> Vec<ShaderError> {
        match status(vs, fs) {
            ProgramStatus::Failed(errors) => errors,
            ProgramStatus::Linked => panic!("expected the program to fail"),
        }
    }

    fn has_link_error(errors: &[ShaderError], needle: &str) -> bool {
        errors.iter().any(|e| matches!(e, ShaderError::Link { message } if message.contains(needle)))
    }

    // ── linked programs ───────────────────────────────────────────────────

    #[test]
    fn flat_color_program_links() {
        assert_eq!(status(VS, FS_UNIFORM), ProgramStatus::Linked);
    }

    #[test]
    fn varyings_link_when_vertex_writes_them() {
        assert_eq!(status(VS_VARYING, FS_VARYING), ProgramStatus::Linked);
    }

    #[test]
    fn fallback_pair_links() {
        assert_eq!(
            status(include_str!("wgsl/fallback_vs.wgsl"), include_str!("wgsl/fallback_fs.wgsl")),
            ProgramStatus::Linked
        );
    }

    // ── compile failures ──────────────────────────────────────────────────

    #[test]
    fn syntax_error_is_a_vertex_compile_error() {
        let errs = errors("@vertex fn vs_main( -> {", FS_UNIFORM);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].stage(), Some(ShaderStage::Vertex));
    }

    #[test]
    fn both_stages_report_compile_errors() {
        let errs = errors("not wgsl", "also not wgsl");
        let stages: Vec<_> = errs.iter().filter_map(ShaderError::stage).collect();
        assert_eq!(stages, vec![ShaderStage::Vertex, ShaderStage::Fragment]);
    }

    #[test]
    fn type_error_is_caught_by_validation() {
        let fs = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    let x: f32 = 1;
    return vec4<f32>(x, true, 0.0, 1.0);
}
"#;
        let errs = errors(VS, fs);
        assert_eq!(errs[0].stage(), Some(ShaderStage::Fragment));
    }

    // ── link failures ─────────────────────────────────────────────────────

    #[test]
    fn missing_vertex_entry_fails_link() {
        let vs = r#"
@vertex
fn main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position, 1.0);
}
"#;
        assert!(has_link_error(&errors(vs, FS_UNIFORM), "vs_main"));
    }

    #[test]
    fn fragment_input_without_vertex_output_fails_link() {
        assert!(has_link_error(&errors(VS, FS_VARYING), "not written by the vertex stage"));
    }

    #[test]
    fn two_component_position_fails_link() {
        let vs = r#"
@vertex
fn vs_main(@location(0) position: vec2<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position, 0.0, 1.0);
}
"#;
        assert!(has_link_error(&errors(vs, FS_UNIFORM), "vec3<f32>"));
    }

    #[test]
    fn extra_vertex_input_fails_link() {
        let vs = r#"
@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
) -> @builtin(position) vec4<f32> {
    return vec4<f32>(position + color * 0.0, 1.0);
}
"#;
        assert!(has_link_error(&errors(vs, FS_UNIFORM), "@location(1)"));
    }

    #[test]
    fn resource_outside_group_zero_fails_link() {
        let fs = r#"
@group(1) @binding(0)
var<uniform> tint: vec4<f32>;

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return tint;
}
"#;
        assert!(has_link_error(&errors(VS, fs), "@group(1)"));
    }

    #[test]
    fn integer_color_output_fails_link() {
        let fs = r#"
@fragment
fn fs_main() -> @location(0) vec4<i32> {
    return vec4<i32>(1, 0, 0, 1);
}
"#;
        assert!(has_link_error(&errors(VS, fs), "color target"));
    }

    #[test]
    fn oversized_uniform_fails_link() {
        let fs = r#"
struct Big {
    a: vec4<f32>,
    b: vec4<f32>,
    c: vec4<f32>,
}

@group(0) @binding(0)
var<uniform> u: Big;

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return u.a + u.b + u.c;
}
"#;
        assert!(has_link_error(&errors(VS, fs), "48 bytes"));
    }
}
