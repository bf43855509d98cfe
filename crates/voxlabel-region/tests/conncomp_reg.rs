//! Connected component relabeling regression test
//!
//! Checks value-sensitive 26-connected relabeling on fixed fixtures and the
//! labeling invariants on random volumes.

use std::collections::VecDeque;
use voxlabel_core::{Volume, VoxelBox, VoxelDepth};
use voxlabel_region::{
    ConnectivityType, LabeledVolume, find_connected_components, get_component_stats,
    label_components,
};
use voxlabel_test::{RegParams, make_blocks, make_volume, random_label_volume};

/// Number of voxels reachable from `start` through neighbors holding the
/// same label.
fn flood_size(labels: &Volume, start: usize, offsets: &[(i32, i32, i32)]) -> usize {
    let value = labels.data()[start];
    let mut seen = vec![false; labels.voxel_count()];
    let mut queue = VecDeque::from([start]);
    seen[start] = true;
    let mut count = 0;
    while let Some(i) = queue.pop_front() {
        count += 1;
        let (x, y, z) = labels.coords_of(i);
        for &(dx, dy, dz) in offsets {
            let (Some(nx), Some(ny), Some(nz)) = (
                x.checked_add_signed(dx),
                y.checked_add_signed(dy),
                z.checked_add_signed(dz),
            ) else {
                continue;
            };
            if let Some(n) = labels.index_of(nx, ny, nz)
                && !seen[n]
                && labels.data()[n] == value
            {
                seen[n] = true;
                queue.push_back(n);
            }
        }
    }
    count
}

fn check_invariants(rp: &mut RegParams, input: &Volume, labeled: &LabeledVolume) {
    let labels = labeled.labels();
    let k = labeled.num_components();
    let offsets = ConnectivityType::TwentySixWay.offsets();

    // Background is preserved exactly
    let background_ok = input
        .data()
        .iter()
        .zip(labels.data())
        .all(|(&v, &l)| (v == 0) == (l == 0));
    rp.check(background_ok, "relabeled voxel nonzero iff input nonzero");

    // Every voxel of a component holds the component's input value
    let values_ok = input
        .data()
        .iter()
        .zip(labels.data())
        .filter(|&(_, &l)| l != 0)
        .all(|(&v, &l)| labeled.representative(l) == Some(v));
    rp.check(values_ok, "component voxels share one input value");

    // Labels are dense and first seen in raster order
    let mut first_seen = Vec::new();
    for (i, &l) in labels.data().iter().enumerate() {
        if l as usize > first_seen.len() {
            first_seen.push(i);
            rp.check(l as usize == first_seen.len(), "labels appear in raster order");
        }
    }
    rp.compare_values(k as f64, first_seen.len() as f64, 0.0);
    rp.compare_values(k as f64, f64::from(labels.max_label()), 0.0);

    // Each label is one connected piece
    let connected = first_seen.iter().enumerate().all(|(j, &start)| {
        flood_size(labels, start, &offsets) == labels.count_value(j as u32 + 1)
    });
    rp.check(connected, "each label forms a single connected piece");

    // Equal-valued neighbors always share a label
    let mut merged = true;
    for (i, &v) in input.data().iter().enumerate() {
        if v == 0 {
            continue;
        }
        let (x, y, z) = input.coords_of(i);
        for &(dx, dy, dz) in &offsets {
            let (Some(nx), Some(ny), Some(nz)) = (
                x.checked_add_signed(dx),
                y.checked_add_signed(dy),
                z.checked_add_signed(dz),
            ) else {
                continue;
            };
            if let Some(n) = input.index_of(nx, ny, nz)
                && input.data()[n] == v
                && labels.data()[n] != labels.data()[i]
            {
                merged = false;
            }
        }
    }
    rp.check(merged, "connected equal-valued voxels share a label");
}

#[test]
fn conncomp_reg() {
    let mut rp = RegParams::new("conncomp");

    // --- Test 1: opposite corners are two components ---
    let vol = make_volume(3, 3, 3, VoxelDepth::Bit8, &[(0, 0, 0, 5), (2, 2, 2, 5)]).unwrap();
    let labeled = label_components(&vol, ConnectivityType::TwentySixWay).unwrap();
    rp.compare_values(2.0, labeled.num_components() as f64, 0.0);
    let stats = get_component_stats(labeled.labels()).unwrap();
    rp.compare_sequences(&[1u64, 1], &stats.iter().map(|s| s.voxel_count).collect::<Vec<_>>());
    rp.check(
        labeled.labels().get_voxel(0, 0, 0) != labeled.labels().get_voxel(2, 2, 2),
        "corner voxels get distinct labels",
    );
    check_invariants(&mut rp, &vol, &labeled);

    // --- Test 2: touching blocks with different values stay apart ---
    let blocks = make_blocks(
        6,
        4,
        3,
        VoxelDepth::Bit16,
        &[
            (
                VoxelBox {
                    x: 0,
                    y: 0,
                    z: 0,
                    w: 3,
                    h: 4,
                    d: 3,
                },
                40_000,
            ),
            (
                VoxelBox {
                    x: 3,
                    y: 0,
                    z: 0,
                    w: 3,
                    h: 4,
                    d: 3,
                },
                2,
            ),
        ],
    )
    .unwrap();
    let labeled = label_components(&blocks, ConnectivityType::TwentySixWay).unwrap();
    rp.compare_values(2.0, labeled.num_components() as f64, 0.0);
    rp.compare_sequences(&[40_000u32, 2], labeled.representatives());
    let comps = find_connected_components(&blocks, ConnectivityType::TwentySixWay).unwrap();
    rp.compare_values(36.0, comps[0].voxel_count as f64, 0.0);
    rp.compare_values(36.0, comps[1].voxel_count as f64, 0.0);
    check_invariants(&mut rp, &blocks, &labeled);

    // --- Test 3: all-zero volume ---
    let empty = Volume::new(5, 5, 5, VoxelDepth::Bit32).unwrap();
    let labeled = label_components(&empty, ConnectivityType::TwentySixWay).unwrap();
    rp.compare_values(0.0, labeled.num_components() as f64, 0.0);
    rp.compare_volumes(&empty, labeled.labels());

    // --- Test 4: random volumes ---
    for &(max_label, fill) in &[(1, 30), (3, 60), (50, 80), (5000, 90)] {
        let vol = random_label_volume(12, 10, 6, max_label, fill).unwrap();
        let labeled = label_components(&vol, ConnectivityType::TwentySixWay).unwrap();
        eprintln!(
            "  max_label {:5}, fill {:2}%: {} components",
            max_label,
            fill,
            labeled.num_components()
        );
        check_invariants(&mut rp, &vol, &labeled);

        // Relabeling is deterministic
        let again = label_components(&vol, ConnectivityType::TwentySixWay).unwrap();
        rp.compare_volumes(labeled.labels(), again.labels());
    }

    assert!(rp.cleanup(), "conncomp regression test failed");
}
