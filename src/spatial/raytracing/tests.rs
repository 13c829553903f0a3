#[cfg(test)]
mod ray_tests {
    use crate::spatial::{math::vector::V3c, raytracing::Ray3};

    #[test]
    fn test_ray_precomputes_reciprocal_and_sign() {
        let ray = Ray3::new(V3c::unit(0.0f32), V3c::new(2., -4., 0.));
        assert_eq!(ray.invdir.x, 0.5);
        assert_eq!(ray.invdir.y, -0.25);
        assert!(ray.invdir.z.is_infinite());
        assert_eq!(ray.sign, [0, 1, 0]);
        assert_eq!(ray.tmin, 0.);
        assert_eq!(ray.tmax, f32::MAX);
    }

    #[test]
    fn test_negative_zero_direction_counts_as_negative() {
        let ray = Ray3::new(V3c::unit(0.0f64), V3c::new(1., -0.0, 0.0));
        assert_eq!(ray.sign, [0, 1, 0]);
    }

    #[test]
    fn test_segment_ray_endpoints() {
        let ray = Ray3::from_segment(V3c::new(1., 2., 3.), V3c::new(5., 2., -1.));
        assert_eq!(ray.point_at(ray.tmin), V3c::new(1., 2., 3.));
        assert_eq!(ray.point_at(ray.tmax), V3c::new(5., 2., -1.));
        assert_eq!(ray.point_at(0.5), V3c::new(3., 2., 1.));
    }
}

#[cfg(test)]
mod intersection_tests {
    use crate::spatial::{math::vector::V3c, raytracing::Ray3, Aabb};
    use rand::{Rng, SeedableRng};

    fn unit_cube() -> Aabb<f32> {
        Aabb::new(V3c::unit(0.), V3c::unit(1.))
    }

    #[test]
    fn test_ray_through_box_is_clipped() {
        let aabb = Aabb::new(V3c::unit(0.), V3c::unit(4.));
        let mut ray = Ray3::new(V3c::new(-2., 2., 2.), V3c::new(1., 0., 0.));
        assert!(aabb.intersect_ray(&mut ray));
        assert_eq!(ray.tmin, 2.);
        assert_eq!(ray.tmax, 6.);
    }

    #[test]
    fn test_diagonal_ray_hits() {
        let mut ray = Ray3::new(V3c::unit(-1.0f32), V3c::unit(1.));
        assert!(unit_cube().intersect_ray(&mut ray));
        assert!((ray.tmin - 1.).abs() < 0.0001);
        assert!((ray.tmax - 2.).abs() < 0.0001);
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let mut ray = Ray3::new(V3c::new(-1., 0.5, 0.5), V3c::new(-1., 0., 0.));
        let before = ray;
        assert!(!unit_cube().intersect_ray(&mut ray));
        assert_eq!(ray, before);
    }

    #[test]
    fn test_ray_passing_by_misses() {
        let mut ray = Ray3::new(V3c::new(-1., 3., 0.5), V3c::new(1., 0.1, 0.));
        assert!(!unit_cube().intersect_ray(&mut ray));

        let mut ray = Ray3::new(V3c::new(-1., 0.5, 3.), V3c::new(1., 0., 0.1));
        assert!(!unit_cube().intersect_ray(&mut ray));
    }

    #[test]
    fn test_axis_parallel_ray_inside_slab_is_not_rejected() {
        // direction is zero on y and z, origin is within the y and z extents
        let mut ray = Ray3::new(V3c::new(-5., 0.25, 0.75), V3c::new(1., 0., 0.));
        assert!(unit_cube().intersect_ray(&mut ray));
        assert_eq!(ray.tmin, 5.);
        assert_eq!(ray.tmax, 6.);

        // same for a negative facing ray on the z axis
        let mut ray = Ray3::new(V3c::new(0.5, 0.5, 9.), V3c::new(0., 0., -2.));
        assert!(unit_cube().intersect_ray(&mut ray));
        assert_eq!(ray.tmin, 4.);
        assert_eq!(ray.tmax, 4.5);
    }

    #[test]
    fn test_axis_parallel_ray_outside_slab_is_rejected() {
        let mut ray = Ray3::new(V3c::new(-5., 1.5, 0.5), V3c::new(1., 0., 0.));
        assert!(!unit_cube().intersect_ray(&mut ray));

        let mut ray = Ray3::new(V3c::new(0.5, -0.1, 9.), V3c::new(0., 0., -1.));
        assert!(!unit_cube().intersect_ray(&mut ray));
    }

    #[test]
    fn test_origin_on_face_plane_still_clips_other_axes() {
        // zero direction on x with the origin exactly on the min x face
        let mut ray = Ray3::with_range(V3c::new(0., -5., 0.5), V3c::new(0., 1., 0.), 0., 100.);
        assert!(unit_cube().intersect_ray(&mut ray));
        assert_eq!((ray.tmin, ray.tmax), (5., 6.));

        // same on the max x face
        let mut ray = Ray3::with_range(V3c::new(1., 7., 0.5), V3c::new(0., -1., 0.), 0., 100.);
        assert!(unit_cube().intersect_ray(&mut ray));
        assert_eq!((ray.tmin, ray.tmax), (6., 7.));
    }

    #[test]
    fn test_clip_segment_lying_in_face_plane() {
        let aabb = unit_cube();
        let (start, end) = aabb
            .clip_segment(V3c::new(0., -1., 0.5), V3c::new(0., 3., 0.5))
            .unwrap();
        assert_eq!(start, V3c::new(0., 0., 0.5));
        assert_eq!(end, V3c::new(0., 1., 0.5));
        assert!(aabb.contains_point(&start) && aabb.contains_point(&end));

        let (start, end) = aabb
            .clip_segment(V3c::new(1., -1., 0.5), V3c::new(1., 3., 0.5))
            .unwrap();
        assert_eq!(start, V3c::new(1., 0., 0.5));
        assert_eq!(end, V3c::new(1., 1., 0.5));
        assert!(aabb.contains_point(&start) && aabb.contains_point(&end));

        // in the top z face, running diagonally across x and y
        let (start, end) = aabb
            .clip_segment(V3c::new(-1., -1., 1.), V3c::new(3., 3., 1.))
            .unwrap();
        assert_eq!(start, V3c::new(0., 0., 1.));
        assert_eq!(end, V3c::new(1., 1., 1.));
    }

    #[test]
    fn test_interval_is_only_tightened() {
        let aabb = Aabb::new(V3c::unit(0.), V3c::unit(10.));
        // ray starts inside the box: entry is behind tmin, so tmin stays
        let mut ray = Ray3::with_range(V3c::unit(5.), V3c::new(1., 0., 0.), 0., 2.);
        assert!(aabb.intersect_ray(&mut ray));
        assert_eq!(ray.tmin, 0.);
        assert_eq!(ray.tmax, 2.);
    }

    #[test]
    fn test_box_beyond_valid_interval_misses() {
        let aabb = Aabb::new(V3c::new(10., 0., 0.), V3c::new(11., 1., 1.));
        let mut ray = Ray3::with_range(V3c::new(0., 0.5, 0.5), V3c::new(1., 0., 0.), 0., 5.);
        assert!(!aabb.intersect_ray(&mut ray));
        assert_eq!(ray.tmax, 5.);

        // box behind the origin
        let aabb = Aabb::new(V3c::new(-3., 0., 0.), V3c::new(-2., 1., 1.));
        let mut ray = Ray3::with_range(V3c::new(0., 0.5, 0.5), V3c::new(1., 0., 0.), 0., 5.);
        assert!(!aabb.intersect_ray(&mut ray));
    }

    #[test]
    fn test_chained_boxes_tighten_monotonically() {
        let outer = Aabb::new(V3c::unit(0.), V3c::unit(10.));
        let inner = Aabb::new(V3c::unit(4.), V3c::unit(6.));
        let mut ray = Ray3::new(V3c::new(-1., 5., 5.), V3c::new(1., 0., 0.));
        assert!(outer.intersect_ray(&mut ray));
        assert_eq!((ray.tmin, ray.tmax), (1., 11.));
        assert!(inner.intersect_ray(&mut ray));
        assert_eq!((ray.tmin, ray.tmax), (5., 7.));
        // testing the outer box again does not loosen the interval
        assert!(outer.intersect_ray(&mut ray));
        assert_eq!((ray.tmin, ray.tmax), (5., 7.));
    }

    #[test]
    fn test_clip_segment() {
        let aabb: Aabb<f64> = Aabb::new(V3c::unit(0.), V3c::unit(4.));
        let (start, end) = aabb
            .clip_segment(V3c::new(-2., 1., 1.), V3c::new(6., 1., 1.))
            .unwrap();
        assert_eq!(start, V3c::new(0., 1., 1.));
        assert_eq!(end, V3c::new(4., 1., 1.));

        // segment ending inside the box keeps its end
        let (start, end) = aabb
            .clip_segment(V3c::new(1., 1., -4.), V3c::new(1., 1., 2.))
            .unwrap();
        assert_eq!((start.x, start.y), (1., 1.));
        assert!(start.z.abs() < 1e-9);
        assert_eq!(end, V3c::new(1., 1., 2.));

        assert!(aabb
            .clip_segment(V3c::new(5., 5., 5.), V3c::new(9., 9., 9.))
            .is_none());
    }

    #[test]
    fn test_degenerate_segment_inside_box() {
        let aabb = Aabb::new(V3c::unit(0.), V3c::unit(4.));
        let point = V3c::new(1., 2., 3.);
        assert_eq!(aabb.clip_segment(point, point), Some((point, point)));
    }

    #[test]
    fn test_random_rays_agree_with_sampling() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
        let aabb = Aabb::new(V3c::new(-1., -2., -3.), V3c::new(2., 1., 0.5));
        for _ in 0..2000 {
            let origin = V3c::new(
                rng.gen_range(-6.0..6.0),
                rng.gen_range(-6.0..6.0),
                rng.gen_range(-6.0..6.0),
            );
            let direction = V3c::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let mut ray = Ray3::<f64>::with_range(origin, direction, 0., 20.);
            let hit = aabb.intersect_ray(&mut ray);
            if hit {
                assert!(0. <= ray.tmin && ray.tmin <= ray.tmax && ray.tmax <= 20.);
                let mid = ray.point_at((ray.tmin + ray.tmax) / 2.);
                let grown = Aabb::new(aabb.min - V3c::unit(1e-6), aabb.max + V3c::unit(1e-6));
                assert!(grown.contains_point(&mid));
            } else {
                // no sample along the valid interval may be inside the box
                for step in 0..=400 {
                    let p = ray.point_at(step as f64 * 0.05);
                    let shrunk =
                        Aabb::new(aabb.min + V3c::unit(1e-6), aabb.max - V3c::unit(1e-6));
                    assert!(!shrunk.contains_point(&p));
                }
            }
        }
    }
}
