//! Region → month hierarchy and its angular/radial partition layout.
//!
//! The tree has a fixed shape: root, one child per region (sorted
//! ascending by label), and exactly 12 month leaves per region in calendar
//! order. A leaf whose month has no contributing records carries
//! `value: None` ("no data") and weighs 0 at layout time, so every region
//! keeps uniform angular slots for its months.

use ipca_core::month::{self, MONTH_NAMES};
use ipca_core::record::IndexRecord;
use ipca_data::aggregate::{aggregate_in_order, Reduce};
use std::collections::BTreeMap;
use std::f64::consts::TAU;

/// Name of the hierarchy root, displayed at the sunburst center.
pub const ROOT_NAME: &str = "IPCA";

#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    pub name: String,
    /// Leaf aggregation result; `None` for internal nodes and for leaves
    /// with no contributing records.
    pub value: Option<f64>,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Total weight of this subtree: leaf values summed, no-data leaves
    /// contributing the additive identity.
    pub fn subtree_sum(&self) -> f64 {
        if self.children.is_empty() {
            self.value.unwrap_or(0.0)
        } else {
            self.children.iter().map(HierarchyNode::subtree_sum).sum()
        }
    }

    fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.height() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Build the three-level tree: root → region → month, with month leaves
/// summing the valid variations of (region, month).
pub fn build_hierarchy(records: &[&IndexRecord]) -> HierarchyNode {
    // BTreeMap keys give the explicit ascending region order.
    let mut by_region: BTreeMap<String, Vec<&IndexRecord>> = BTreeMap::new();
    for record in records {
        by_region
            .entry(record.regiao.trim().to_string())
            .or_default()
            .push(record);
    }

    let month_keys: Vec<u32> = (1..=month::MONTHS_PER_YEAR).collect();
    let children = by_region
        .into_iter()
        .map(|(region, region_records)| {
            let sums = aggregate_in_order(&region_records, &month_keys, |r| r.mes, Reduce::Sum);
            let months = MONTH_NAMES
                .iter()
                .zip(sums.iter())
                .map(|(name, (_, value))| HierarchyNode {
                    name: (*name).to_string(),
                    value: *value,
                    children: Vec::new(),
                })
                .collect();
            HierarchyNode {
                name: region,
                value: None,
                children: months,
            }
        })
        .collect();

    HierarchyNode {
        name: ROOT_NAME.to_string(),
        value: None,
        children,
    }
}

/// One laid-out node: an angular interval [x0, x1] (radians) and a radial
/// band [y0, y1].
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionCell {
    pub name: String,
    /// Ancestor names from the root down to this node.
    pub trail: Vec<String>,
    pub depth: usize,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    /// Subtree weight for internal nodes; the leaf aggregation result
    /// (None = no data) for leaves.
    pub value: Option<f64>,
    /// Subtree weight used for angular allocation.
    pub weight: f64,
}

/// Partition layout: the root spans [0, 2π]; each node's interval is
/// subdivided among its children proportionally to subtree weight,
/// contiguously in declared order. Depth bands split the radius evenly.
/// A zero-weight subtree gets a defined zero-width interval.
pub fn partition(root: &HierarchyNode, radius: f64) -> Vec<PartitionCell> {
    let bands = root.height() + 1;
    let band_thickness = radius / bands as f64;
    let mut cells = Vec::new();
    walk(root, 0, 0.0, TAU, band_thickness, &mut Vec::new(), &mut cells);
    cells
}

fn walk(
    node: &HierarchyNode,
    depth: usize,
    x0: f64,
    x1: f64,
    band: f64,
    trail: &mut Vec<String>,
    out: &mut Vec<PartitionCell>,
) {
    trail.push(node.name.clone());
    let weight = node.subtree_sum();
    let value = if node.children.is_empty() {
        node.value
    } else {
        Some(weight)
    };
    out.push(PartitionCell {
        name: node.name.clone(),
        trail: trail.clone(),
        depth,
        x0,
        x1,
        y0: depth as f64 * band,
        y1: (depth + 1) as f64 * band,
        value,
        weight,
    });

    if !node.children.is_empty() {
        let total: f64 = node.children.iter().map(HierarchyNode::subtree_sum).sum();
        let width = x1 - x0;
        let mut cursor = x0;
        for child in &node.children {
            let child_width = if total > 0.0 {
                width * child.subtree_sum() / total
            } else {
                0.0
            };
            walk(child, depth + 1, cursor, cursor + child_width, band, trail, out);
            cursor += child_width;
        }
    }
    trail.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipca_core::record::IndexRecord;

    fn record(mes: u32, regiao: &str, variacao: Option<f64>) -> IndexRecord {
        IndexRecord {
            ano: 2024,
            mes,
            grupo: "Alimentação".to_string(),
            regiao: regiao.to_string(),
            variacao,
        }
    }

    #[test]
    fn test_every_region_has_twelve_months_in_order() {
        let records = vec![record(3, "Curitiba (PR)", Some(0.4))];
        let refs: Vec<&IndexRecord> = records.iter().collect();
        let root = build_hierarchy(&refs);
        assert_eq!(root.name, ROOT_NAME);
        assert_eq!(root.children.len(), 1);
        let region = &root.children[0];
        assert_eq!(region.children.len(), 12);
        assert_eq!(region.children[0].name, "Janeiro");
        assert_eq!(region.children[11].name, "Dezembro");
        assert_eq!(region.children[2].value, Some(0.4));
        // untouched months are no-data, not zero
        assert_eq!(region.children[0].value, None);
    }

    #[test]
    fn test_leaf_sum_equals_region_record_sum() {
        let records = vec![
            record(1, "Salvador (BA)", Some(0.5)),
            record(1, "Salvador (BA)", Some(0.3)),
            record(2, "Salvador (BA)", Some(0.2)),
            record(2, "Salvador (BA)", None),
        ];
        let refs: Vec<&IndexRecord> = records.iter().collect();
        let root = build_hierarchy(&refs);
        let region = &root.children[0];
        assert!((region.subtree_sum() - 1.0).abs() < 1e-9);
        assert_eq!(region.children[0].value, Some(0.8));
        assert_eq!(region.children[1].value, Some(0.2));
    }

    #[test]
    fn test_regions_sorted_ascending() {
        let records = vec![
            record(1, "São Paulo (SP)", Some(0.1)),
            record(1, "Belém (PA)", Some(0.1)),
            record(1, "Curitiba (PR)", Some(0.1)),
        ];
        let refs: Vec<&IndexRecord> = records.iter().collect();
        let root = build_hierarchy(&refs);
        let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_partition_children_tile_parent_interval() {
        let records = vec![
            record(1, "A", Some(1.0)),
            record(2, "A", Some(3.0)),
            record(1, "B", Some(4.0)),
        ];
        let refs: Vec<&IndexRecord> = records.iter().collect();
        let root = build_hierarchy(&refs);
        let cells = partition(&root, 250.0);

        for parent in &cells {
            let children: Vec<&PartitionCell> = cells
                .iter()
                .filter(|c| c.depth == parent.depth + 1 && c.trail.starts_with(&parent.trail))
                .collect();
            if children.is_empty() {
                continue;
            }
            let child_width: f64 = children.iter().map(|c| c.x1 - c.x0).sum();
            assert!((child_width - (parent.x1 - parent.x0)).abs() < 1e-9);
            // contiguous in declared order
            for pair in children.windows(2) {
                assert!((pair[0].x1 - pair[1].x0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_zero_weight_gets_zero_width_interval() {
        let records = vec![record(1, "A", Some(2.0)), record(1, "B", None)];
        let refs: Vec<&IndexRecord> = records.iter().collect();
        let root = build_hierarchy(&refs);
        let cells = partition(&root, 250.0);
        let b = cells.iter().find(|c| c.name == "B").unwrap();
        assert_eq!(b.x1 - b.x0, 0.0);
        let a = cells.iter().find(|c| c.name == "A").unwrap();
        assert!((a.x1 - a.x0 - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_depth_increases_radius() {
        let records = vec![record(1, "A", Some(1.0))];
        let refs: Vec<&IndexRecord> = records.iter().collect();
        let root = build_hierarchy(&refs);
        let cells = partition(&root, 300.0);
        for cell in &cells {
            assert!((cell.y0 - cell.depth as f64 * 100.0).abs() < 1e-9);
            assert!((cell.y1 - cell.y0 - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_snapshot_layout_is_valid() {
        let root = build_hierarchy(&[]);
        let cells = partition(&root, 250.0);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].depth, 0);
        assert_eq!(cells[0].weight, 0.0);
    }
}
