//! Tests for the WASM-facing helpers.

use super::*;

/// Confirms the internal helper builds the demo ring.
///
/// # Examples
/// ```
/// use ring_wasm::create_ring_internal;
/// assert_eq!(create_ring_internal(32, 1.0, 0.25, 0.25).unwrap().vertex_count(), 512);
/// ```
#[test]
fn create_ring_produces_demo_counts() {
    let mesh = create_ring_internal(4, 1.0, 0.5, 0.25).expect("valid parameters");

    assert_eq!(mesh.vertex_count(), 64);
    assert_eq!(mesh.triangle_count(), 32);
    assert_eq!(mesh.vertex_data().len(), 192); // 64 vertices * 3 components
    assert_eq!(mesh.index_data().len(), 96); // 32 triangles * 3 indices
    assert_eq!(mesh.normal_data().len(), 192);
    assert!(!mesh.is_empty());
}

/// Ensures invalid parameters surface explicit errors.
#[test]
fn create_ring_rejects_invalid_parameters() {
    let err = create_ring_internal(2, 1.0, 0.5, 0.25).unwrap_err();
    assert_eq!(err.parameter(), "segments");

    let err = create_ring_internal(8, 0.5, 0.5, 0.5).unwrap_err();
    assert_eq!(err.parameter(), "thickness");
}

/// Tests that buffers contain valid data.
#[test]
fn create_ring_buffers_valid() {
    let mesh = create_ring_internal(default_segments(), 1.0, 0.25, 0.25)
        .expect("valid parameters");

    for &v in mesh.vertex_data() {
        assert!(v.is_finite(), "Vertex value should be finite");
    }

    let vertex_count = mesh.vertex_count();
    for &idx in mesh.index_data() {
        assert!(idx < vertex_count, "Index {} out of range", idx);
    }

    for n in mesh.normal_data().chunks(3) {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-5, "normal length {len}");
    }
}

#[test]
fn presets_json_lists_four_scenes() {
    let json = scene_presets_json_internal().expect("serializes");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(4));
    assert_eq!(value[0]["name"], "still_life");
}

// =============================================================================
// SCENE CONTROLLER
// =============================================================================

#[test]
fn controller_starts_on_first_scene() {
    let controller = SceneController::new();
    assert_eq!(controller.scene_count(), 4);
    assert_eq!(controller.active_scene(), 0);
    assert_eq!(controller.active_light(), 0);
    assert_eq!(controller.shading_algorithm(), "gouraud");
    assert_eq!(controller.height_scale(), 1.0);
}

#[test]
fn controller_switches_shading() {
    let mut controller = SceneController::new();
    controller
        .set_shading_algorithm_internal("Phong")
        .expect("known algorithm");
    assert_eq!(controller.shading_algorithm(), "phong");
    assert_eq!(controller.model_material_key(), "illum_phong");
    assert_eq!(controller.ground_material_key(), "ground_phong");

    assert!(controller.set_shading_algorithm_internal("toon").is_err());
    assert_eq!(controller.shading_algorithm(), "phong");
}

#[test]
fn controller_uniforms_json() {
    let controller = SceneController::new();
    let json = controller
        .uniforms_json_internal(1, glam::Vec3::new(0.0, 1.8, 10.0))
        .expect("scene exists");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["num_lights"], 1);
    assert_eq!(value["light_positions"].as_array().map(Vec::len), Some(3));
    assert!(controller
        .uniforms_json_internal(4, glam::Vec3::ZERO)
        .is_err());
}

#[test]
fn controller_ring_mesh() {
    let controller = SceneController::new();
    let mesh = controller.ring_mesh_internal(1, 1).expect("model 1 is a ring");
    assert_eq!(mesh.vertex_count(), 512);
    assert_eq!(mesh.triangle_count(), 256);

    assert!(controller.ring_mesh_internal(1, 0).is_err());
}

#[test]
fn controller_from_json_round_trip() {
    let json = scene_presets_json_internal().unwrap();
    let controller = SceneController::from_json_internal(&json).expect("valid scenes");
    assert_eq!(controller.scene_count(), 4);
    assert!(SceneController::from_json_internal("[]").is_err());
}

#[test]
fn controller_exposes_scene_state() {
    let mut controller = SceneController::new();
    controller.scene_set_mut().set_active_scene(3).unwrap();
    controller.scene_set_mut().set_height_scale(0.5).unwrap();
    assert_eq!(controller.active_scene(), 3);
    assert_eq!(controller.scene_set().height_scale(), 0.5);
}
