use facet::{polygon_normal, vertex_normal};
use facet_math::{geometry, Vec3, Vector};

#[test]
fn cube_face_normals_are_axis_aligned() {
    let model = facet_test_data::cube();
    let expected = [
        Vec3::UNIT_Z,
        -Vec3::UNIT_Z,
        -Vec3::UNIT_Y,
        Vec3::UNIT_Y,
        -Vec3::UNIT_X,
        Vec3::UNIT_X,
    ];

    for (polygon, want) in model.polygons.iter().zip(expected) {
        let normal = polygon_normal(polygon, &model.vertices).unwrap();
        assert!(normal.eps_eq(&want, 1e-6));
    }
}

#[test]
fn face_normal_is_orthogonal_to_every_edge() {
    let model = facet_test_data::pyramid();

    for polygon in &model.polygons {
        let normal = polygon_normal(polygon, &model.vertices).unwrap();
        let indices = &polygon.vertex_indices;
        for i in 0..indices.len() {
            let a = model.vertices[indices[i]];
            let b = model.vertices[indices[(i + 1) % indices.len()]];
            float_eq::assert_float_eq!(geometry::dot3(normal, b - a), 0.0, abs <= 1e-6);
        }
    }
}

#[test]
fn face_normal_is_unit_length() {
    let model = facet_test_data::pyramid();
    for polygon in &model.polygons {
        let normal = polygon_normal(polygon, &model.vertices).unwrap();
        float_eq::assert_float_eq!(normal.len(), 1.0, abs <= 1e-6);
    }
}

#[test]
fn vertex_normal_averages_incident_faces() {
    let model = facet_test_data::pyramid();

    // Base corner 0 sits on sides 0 and 3 and the base quad.
    let mut sum = Vec3::ZERO;
    for i in [0, 3, 4] {
        sum += polygon_normal(&model.polygons[i], &model.vertices).unwrap();
    }
    let mut expected = sum / 3.0;
    expected.nor();

    let normal = vertex_normal(model.vertices[0], &model.vertices, &model.polygons).unwrap();
    assert!(normal.eps_eq(&expected, 1e-6));
}

#[test]
fn cube_corner_normal_points_along_the_diagonal() {
    let model = facet_test_data::cube();

    // Corner (1, 1, 1) touches the +x, +y and +z faces.
    let normal = vertex_normal(
        Vec3::new(1.0, 1.0, 1.0),
        &model.vertices,
        &model.polygons,
    )
    .unwrap();

    let inv_sqrt3 = 1.0 / 3.0_f32.sqrt();
    let expected = Vec3::new(inv_sqrt3, inv_sqrt3, inv_sqrt3);
    assert!(normal.eps_eq(&expected, 1e-6));
}

#[test]
fn apex_normal_is_straight_up() {
    let model = facet_test_data::pyramid();

    // The four side normals cancel horizontally at the apex.
    let apex = model.vertices[4];
    let normal = vertex_normal(apex, &model.vertices, &model.polygons).unwrap();
    assert!(normal.eps_eq(&Vec3::UNIT_Y, 1e-6));
}

#[test]
fn estimation_leaves_the_model_untouched() {
    let model = facet_test_data::cube();
    let before = model.clone();

    for polygon in &model.polygons {
        let _ = polygon_normal(polygon, &model.vertices).unwrap();
    }
    for vertex in &model.vertices {
        let _ = vertex_normal(*vertex, &model.vertices, &model.polygons).unwrap();
    }

    assert_eq!(model, before);
}
