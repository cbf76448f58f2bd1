//! Document - 描画面となるノードツリー
//!
//! ブラウザの DOM のうち、投稿ワークフローが使う操作だけを持つ arena 形式のツリー。
//!
//! # 学習ポイント
//! - `Vec<NodeData>` + インデックス（`NodeId`）による木構造（Rc/RefCell を使わない）
//! - 深いコピー（cloneNode(true)）は新しいノードを arena に追加して作る
//! - 切り離されたノード（parent = None）も arena に残る

use std::collections::BTreeMap;

use super::selector::Selector;

/// arena 内のノードを指すハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    attrs: BTreeMap<String, String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl NodeData {
    fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.attrs
            .get("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.attrs.get("id").is_some_and(|v| v == id),
            Selector::Class(class) => self.has_class(class),
            Selector::Tag(tag) => self.tag == *tag,
        }
    }
}

/// ツリー操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node {0:?} is not attached to a parent")]
    Detached(NodeId),

    #[error("node {0:?} cannot be moved inside its own subtree")]
    Cycle(NodeId),
}

/// Document はルートノードを持つノードツリー
///
/// # 使用例
/// ```ignore
/// let mut doc = Document::new();
/// let list = doc.create_element("section");
/// doc.append_child(doc.root(), list)?;
/// let header = doc.query(".jobs-header");
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::element("#document")],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// 切り離された要素を作成
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(NodeData::element(tag));
        NodeId(self.nodes.len() - 1)
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].attrs.get(name).map(String::as_str)
    }

    pub fn attrs(&self, node: NodeId) -> impl Iterator<Item = (&str, &str)> {
        self.nodes[node.0]
            .attrs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        self.nodes[node.0].attrs.insert(name.to_string(), value.into());
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].has_class(class)
    }

    /// ノード自身のテキスト（子孫のテキストは含まない）
    pub fn own_text(&self, node: NodeId) -> &str {
        &self.nodes[node.0].text
    }

    /// textContent 相当: 自身と子孫のテキストを文書順に連結
    pub fn text(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let data = &self.nodes[node.0];
        out.push_str(&data.text);
        for &child in &data.children {
            self.collect_text(child, out);
        }
    }

    /// innerText への代入と同じく、子ノードを外してテキストだけにする
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
        self.nodes[node.0].text = text.into();
    }

    /// 入力欄の現在値
    pub fn value(&self, node: NodeId) -> &str {
        self.attr(node, "value").unwrap_or("")
    }

    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        self.set_attr(node, "value", value);
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == self.root {
                return true;
            }
            match self.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// `node` の子孫を文書順（pre-order）に列挙する。`node` 自身は含まない
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[node.0].children.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.nodes[current.0].children.iter().rev().copied());
        }
        out
    }

    /// document.querySelector 相当
    pub fn query(&self, selector: impl Into<Selector>) -> Option<NodeId> {
        self.query_within(self.root, selector)
    }

    /// element.querySelector 相当（`scope` 自身は対象外）
    pub fn query_within(&self, scope: NodeId, selector: impl Into<Selector>) -> Option<NodeId> {
        let selector = selector.into();
        self.descendants(scope)
            .into_iter()
            .find(|&n| self.nodes[n.0].matches(&selector))
    }

    pub fn query_all(&self, selector: impl Into<Selector>) -> Vec<NodeId> {
        let selector = selector.into();
        self.descendants(self.root)
            .into_iter()
            .filter(|&n| self.nodes[n.0].matches(&selector))
            .collect()
    }

    /// cloneNode(true) 相当: 属性・テキスト・子孫をすべてコピーした切り離しノードを返す
    pub fn clone_node(&mut self, node: NodeId) -> NodeId {
        let source = &self.nodes[node.0];
        let copy = NodeData {
            tag: source.tag.clone(),
            attrs: source.attrs.clone(),
            text: source.text.clone(),
            children: Vec::new(),
            parent: None,
        };
        let children = source.children.clone();

        self.nodes.push(copy);
        let copy_id = NodeId(self.nodes.len() - 1);
        for child in children {
            let child_copy = self.clone_node(child);
            self.nodes[child_copy.0].parent = Some(copy_id);
            self.nodes[copy_id.0].children.push(child_copy);
        }
        copy_id
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.nodes[n.0].parent;
        }
        false
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::Cycle(child));
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// element.after(node) 相当: `reference` の直後の兄弟として挿入
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) -> Result<(), DomError> {
        if reference == node {
            return Ok(());
        }
        let parent = self.nodes[reference.0]
            .parent
            .ok_or(DomError::Detached(reference))?;
        if self.is_inclusive_ancestor(node, parent) {
            return Err(DomError::Cycle(node));
        }
        self.detach(node);
        let index = self.nodes[parent.0]
            .children
            .iter()
            .position(|&c| c == reference)
            .ok_or(DomError::Detached(reference))?;
        self.nodes[parent.0].children.insert(index + 1, node);
        self.nodes[node.0].parent = Some(parent);
        Ok(())
    }

    /// form.reset() 相当: 配下の入力欄の値を空にする
    pub fn reset_form(&mut self, form: NodeId) {
        for node in self.descendants(form) {
            if matches!(self.tag(node), "input" | "textarea" | "select") {
                self.set_value(node, "");
            }
        }
    }
}
