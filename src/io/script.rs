use super::IoError;
use crate::grid::DensityGrid;
use std::fmt::Write as _;
use std::path::Path;

/// Blender helper that turns the `VM` array into one transparent unit cube per
/// occupied cell, with material alpha equal to the cell's density.
const BLENDER_PRELUDE: &str = r#"import numpy as np
import bpy

def draw_voxel_model(V, N, M, K, group_name='VM'):
  g = bpy.data.groups.new(group_name)
  Nh = N/2
  Mh = M/2
  Kh = K/2
  for i in range(N):
    for j in range(M):
      for k in range(K):
        p = V[i,j,k]
        if p > 0:
          mat_name = 'm'+str(p)[2:]
          mat = bpy.data.materials.get(mat_name)
          if mat is None:
            mat = bpy.data.materials.new(mat_name)
            mat.diffuse_color = (0.5,0.5,0.5)
            mat.alpha = p
            mat.use_transparency = True
          bpy.ops.mesh.primitive_cube_add(location=(i+1/2-Nh, j+1/2-Mh, k+1/2-Kh))
          v = bpy.context.active_object
          v.dimensions = (1,1,1)
          v.active_material = mat
          v.show_transparent = True
          g.objects.link(v)
  return g

"#;

impl DensityGrid {
    /// Render the first frame as a Python script that rebuilds the model inside Blender.
    ///
    /// The array `VM` is indexed `[x, y, z]` and every cell is assigned with two
    /// decimals, layer by layer.
    pub fn to_blender_script(&self) -> String {
        let e = self.extents();
        let mut out = String::from(BLENDER_PRELUDE);
        let _ = writeln!(out, "VM = np.zeros( ({}, {}, {}), dtype=float)", e.nx(), e.ny(), e.nz());
        for ([x, y, z], value) in self.cells() {
            let _ = writeln!(out, "VM[{x},{y},{z}] = {value:.2}");
        }
        let _ = writeln!(out, "N = {}\nM = {}\nK = {}", e.nx(), e.ny(), e.nz());
        out.push_str("g = draw_voxel_model(VM, N, M, K)");
        out
    }

    /// Write [`to_blender_script`](Self::to_blender_script) to `path`.
    pub fn save_script(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_blender_script())?;
        tracing::debug!(path = %path.display(), "saved blender script");
        Ok(())
    }
}
