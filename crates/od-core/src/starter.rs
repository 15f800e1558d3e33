//! The materials-science starter ontology.
//!
//! New sessions open on this document instead of a blank canvas: a
//! research-domain core (material, composition, process, structure,
//! property), a compliance/IP area, and a quality/root-cause area.

use crate::id::ElementId;
use crate::model::{AttrKind, Attribute, Document, Edge, Node};

fn node(
    id: &str,
    kind: &str,
    label: &str,
    x: f64,
    y: f64,
    color: &str,
    attrs: &[(&str, AttrKind, bool)],
) -> Node {
    Node {
        id: ElementId::intern(id),
        kind: kind.to_string(),
        label: label.to_string(),
        x,
        y,
        color: color.to_string(),
        attributes: attrs
            .iter()
            .map(|&(name, kind, required)| Attribute {
                name: name.to_string(),
                kind,
                required,
            })
            .collect(),
    }
}

fn edge(id: &str, source: &str, target: &str, label: &str) -> Edge {
    Edge {
        id: ElementId::intern(id),
        source: ElementId::intern(source),
        target: ElementId::intern(target),
        label: label.to_string(),
    }
}

/// Build the starter document.
pub fn starter_document() -> Document {
    use AttrKind::*;
    Document {
        nodes: vec![
            // 核心研发域
            node(
                "node-material",
                "Material",
                "材料实体 (Material)",
                400.0,
                150.0,
                "#3b82f6",
                &[
                    ("材料ID", String, true),
                    ("名称", String, true),
                    ("批次号", String, true),
                    ("制备人", String, false),
                ],
            ),
            node(
                "node-composition",
                "Composition",
                "成分/配方 (Composition)",
                150.0,
                150.0,
                "#64748b",
                &[
                    ("元素列表", Array, true),
                    ("化学式", String, false),
                    ("添加剂比例", Double, false),
                    ("纯度", Double, false),
                ],
            ),
            node(
                "node-process",
                "Process",
                "工艺过程 (Process)",
                400.0,
                300.0,
                "#8b5cf6",
                &[
                    ("工艺ID", String, true),
                    ("工艺类型", String, true),
                    ("操作员", String, false),
                    ("日期", Timestamp, true),
                ],
            ),
            node(
                "node-parameter",
                "Parameter",
                "工艺参数 (Parameter)",
                250.0,
                400.0,
                "#f59e0b",
                &[
                    ("设定温度", Double, false),
                    ("实际压力", Double, false),
                    ("保温时间", Integer, false),
                    ("气氛", String, false),
                ],
            ),
            node(
                "node-equipment",
                "Equipment",
                "设备/工装 (Equipment)",
                550.0,
                400.0,
                "#d97706",
                &[
                    ("设备编号", String, true),
                    ("校准日期", Timestamp, false),
                    ("运行状态", String, false),
                ],
            ),
            node(
                "node-structure",
                "Microstructure",
                "微观结构 (Microstructure)",
                650.0,
                150.0,
                "#10b981",
                &[
                    ("晶粒尺寸", Double, false),
                    ("相组成", String, false),
                    ("孔隙分布", String, false),
                ],
            ),
            node(
                "node-property",
                "Property",
                "宏观性能 (Property)",
                800.0,
                300.0,
                "#ef4444",
                &[
                    ("抗拉强度", Double, false),
                    ("导电率", Double, false),
                    ("失效载荷", Double, false),
                ],
            ),
            node(
                "node-characterization",
                "Characterization",
                "表征/测试 (Characterization)",
                650.0,
                450.0,
                "#8b5cf6",
                &[
                    ("测试标准", String, true),
                    ("采样位置", String, false),
                    ("环境温度", Double, false),
                ],
            ),
            node(
                "node-application",
                "Application",
                "应用场景 (Application)",
                950.0,
                150.0,
                "#14b8a6",
                &[
                    ("客户", String, false),
                    ("服役寿命", Integer, false),
                    ("工况要求", String, false),
                ],
            ),
            // 合规与知识产权域
            node(
                "node-standard",
                "Standard",
                "法规/标准 (Standard)",
                150.0,
                50.0,
                "#059669",
                &[
                    ("标准号", String, true),
                    ("阈值要求", String, false),
                    ("生效日期", Timestamp, false),
                ],
            ),
            node(
                "node-patent",
                "Patent",
                "专利 (Patent)",
                250.0,
                250.0,
                "#7c3aed",
                &[
                    ("专利号", String, true),
                    ("权利要求", String, false),
                    ("保护期", Integer, false),
                    ("持有者", String, false),
                ],
            ),
            // 质量与根因分析域
            node(
                "node-anomaly",
                "Anomaly",
                "过程异常 (Anomaly)",
                400.0,
                500.0,
                "#f97316",
                &[
                    ("异常代码", String, true),
                    ("发生时刻", Timestamp, true),
                    ("偏离幅度", Double, false),
                    ("处置措施", String, false),
                ],
            ),
            node(
                "node-defect",
                "Defect",
                "缺陷/失效 (Defect)",
                650.0,
                300.0,
                "#dc2626",
                &[
                    ("缺陷类型", String, true),
                    ("尺寸/数量", String, false),
                    ("位置", String, false),
                    ("严重等级", Integer, false),
                ],
            ),
        ],
        edges: vec![
            // 核心流
            edge("edge-1", "node-material", "node-composition", "包含成分"),
            edge("edge-2", "node-material", "node-process", "经过工艺"),
            edge("edge-3", "node-process", "node-material", "产出材料"),
            edge("edge-4", "node-process", "node-parameter", "受控于"),
            edge("edge-5", "node-process", "node-equipment", "使用设备"),
            edge("edge-6", "node-material", "node-structure", "具有结构"),
            edge("edge-7", "node-process", "node-structure", "决定结构"),
            edge("edge-8", "node-structure", "node-property", "决定性能"),
            edge("edge-9", "node-material", "node-property", "表现性能"),
            edge("edge-10", "node-material", "node-characterization", "被测试"),
            edge("edge-11", "node-characterization", "node-structure", "观测结构"),
            edge("edge-12", "node-characterization", "node-property", "验证性能"),
            edge("edge-13", "node-material", "node-application", "应用于"),
            edge("edge-14", "node-application", "node-property", "提出需求"),
            // 合规性关联
            edge("edge-15", "node-material", "node-standard", "须符合"),
            edge("edge-16", "node-composition", "node-standard", "受限于"),
            edge("edge-17", "node-composition", "node-patent", "涉及/规避"),
            edge("edge-18", "node-process", "node-patent", "涉及/规避"),
            // 根因分析关联
            edge("edge-19", "node-process", "node-anomaly", "发生异常"),
            edge("edge-20", "node-equipment", "node-anomaly", "引发异常"),
            edge("edge-21", "node-parameter", "node-anomaly", "偏离导致"),
            edge("edge-22", "node-anomaly", "node-defect", "诱发缺陷"),
            edge("edge-23", "node-structure", "node-defect", "包含缺陷"),
            edge("edge-24", "node-defect", "node-property", "恶化性能"),
            edge("edge-25", "node-characterization", "node-defect", "检出缺陷"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn starter_ids_are_distinct_and_referenced() {
        let doc = starter_document();
        assert_eq!(doc.nodes.len(), 13);
        assert_eq!(doc.edges.len(), 25);

        let node_ids: HashSet<_> = doc.nodes.iter().map(|n| n.id).collect();
        assert_eq!(node_ids.len(), doc.nodes.len());
        let edge_ids: HashSet<_> = doc.edges.iter().map(|e| e.id).collect();
        assert_eq!(edge_ids.len(), doc.edges.len());

        for edge in &doc.edges {
            assert!(node_ids.contains(&edge.source), "dangling {}", edge.source);
            assert!(node_ids.contains(&edge.target), "dangling {}", edge.target);
        }
    }
}
