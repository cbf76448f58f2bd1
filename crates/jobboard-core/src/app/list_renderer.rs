//! ListRenderer - 投稿をテンプレートから複製して一覧に挿入する
//!
//! # フロー
//! 1. テンプレート（最初の `.job-post`）とアンカー（`.jobs-header`）を探す
//! 2. テンプレートを深くコピー
//! 3. title / summary をテキストに、contactEmail を `mailto:` 付きで href に設定
//! 4. ListOrder に従ってアンカーの後ろに挿入
//!
//! # ListOrder
//! - Append: 最後に描画された投稿の直後。画面の並びが投稿順になる
//! - Legacy: 常にヘッダーの直後。新しい投稿ほど上に来る

use crate::config::{ListOrder, Selectors};
use crate::dom::{Document, NodeId, Selector};
use crate::domain::errors::JobBoardError;
use crate::domain::JobPosting;

pub struct ListRenderer<'a> {
    selectors: &'a Selectors,
    order: ListOrder,
}

impl<'a> ListRenderer<'a> {
    pub fn new(selectors: &'a Selectors, order: ListOrder) -> Self {
        Self { selectors, order }
    }

    fn find(&self, doc: &Document, selector: &str) -> Result<NodeId, JobBoardError> {
        doc.query(selector)
            .ok_or_else(|| JobBoardError::lookup(selector))
    }

    fn find_within(
        &self,
        doc: &Document,
        scope: NodeId,
        selector: &str,
    ) -> Result<NodeId, JobBoardError> {
        doc.query_within(scope, selector)
            .ok_or_else(|| JobBoardError::lookup(selector))
    }

    /// 描画に必要なノードが揃っているか確認し、(テンプレート, アンカー) を返す
    ///
    /// 保存より前に呼ぶことで、描画できない投稿を保存しないようにできる。
    pub fn check(&self, doc: &Document) -> Result<(NodeId, NodeId), JobBoardError> {
        let s = self.selectors;
        let template = self.find(doc, &s.template)?;
        let anchor = self.find(doc, &s.anchor)?;
        for selector in [&s.post_title, &s.post_summary, &s.post_contact_email] {
            self.find_within(doc, template, selector)?;
        }
        Ok((template, anchor))
    }

    /// 投稿をひとつ描画して挿入し、挿入したノードを返す
    ///
    /// テンプレート・アンカー・投影先のどれかが無ければ、ツリーを変更せずに `Lookup` を返す。
    pub fn insert(&self, doc: &mut Document, job: &JobPosting) -> Result<NodeId, JobBoardError> {
        let s = self.selectors;
        let (template, anchor) = self.check(doc)?;
        let reference = self.reference_node(doc, anchor);

        let post = doc.clone_node(template);
        let title = self.find_within(doc, post, &s.post_title)?;
        doc.set_text(title, job.title.as_str());
        let summary = self.find_within(doc, post, &s.post_summary)?;
        doc.set_text(summary, job.summary.as_str());
        let contact = self.find_within(doc, post, &s.post_contact_email)?;
        doc.set_attr(contact, "href", job.mailto());

        doc.insert_after(reference, post)
            .map_err(|_| JobBoardError::lookup(s.anchor.as_str()))?;
        tracing::debug!(title = %job.title, order = ?self.order, "job rendered");
        Ok(post)
    }

    /// 挿入位置の基準ノード
    fn reference_node(&self, doc: &Document, anchor: NodeId) -> NodeId {
        match self.order {
            ListOrder::Legacy => anchor,
            ListOrder::Append => {
                let list = doc.parent(anchor);
                doc.query_all(Selector::parse(&self.selectors.template))
                    .into_iter()
                    .rev()
                    .find(|&post| list.is_some() && doc.parent(post) == list)
                    .unwrap_or(anchor)
            }
        }
    }
}
